// Component discovery passes
pub mod discovery;

// Lazy resolution of heavy components
pub mod lazy_loader;

// Per-package theme projection of the token store
pub mod theme;

// System orchestrator
pub mod system;

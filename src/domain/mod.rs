// Component catalog and registry
pub mod catalog;

// Port interfaces
pub mod ports;

// Dashboard routes and placeholder resolution
pub mod routes;

// Design tokens
pub mod tokens;

// Domain-specific error types
pub mod errors;

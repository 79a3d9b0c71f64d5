pub mod documents;
pub mod module_fetcher;
pub mod observability;
pub mod showcase;
pub mod sources;

pub use module_fetcher::FsModuleFetcher;
pub use showcase::{ListeningHandle, ShowcaseServer};
pub use sources::{DirectorySource, ManifestSource};

use crate::domain::catalog::{ComponentDescriptor, ComponentName};
use crate::domain::errors::DiscoveryError;
use anyhow::Result;
use async_trait::async_trait;

/// A place component descriptors are discovered from: the built-in table,
/// a manifest file, a source directory.
pub trait ComponentSource: Send + Sync {
    fn name(&self) -> &str;
    fn discover(&self) -> Result<Vec<ComponentDescriptor>, DiscoveryError>;
}

/// Implementation resource of a lazily loaded component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModule {
    pub component: String,
    pub resource: String,
    pub bytes: Vec<u8>,
}

impl LoadedModule {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// Need async_trait for async functions in trait objects
#[async_trait]
pub trait ModuleFetcher: Send + Sync {
    async fn fetch(&self, name: &ComponentName) -> Result<LoadedModule>;
}

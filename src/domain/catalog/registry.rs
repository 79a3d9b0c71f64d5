use super::descriptor::{ComponentDescriptor, ComponentName, ComponentStatus, PropsContract};
use super::stub::{self, Rendered};
use crate::domain::errors::RegistryError;
use serde::Serialize;
use std::collections::HashMap;

/// In-progress registration for a single build pass
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<ComponentDescriptor>,
    index: HashMap<String, usize>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: ComponentDescriptor) -> Result<(), RegistryError> {
        let key = descriptor.name().key().to_string();
        if key.is_empty() {
            return Err(RegistryError::InvalidName {
                name: descriptor.name().to_string(),
            });
        }

        if let Some(&existing) = self.index.get(&key) {
            return Err(RegistryError::DuplicateName {
                name: descriptor.name().to_string(),
                existing: self.entries[existing].name().to_string(),
            });
        }

        if descriptor.status() != ComponentStatus::Stub && descriptor.props().is_empty() {
            return Err(RegistryError::InvalidStatus {
                name: descriptor.name().to_string(),
                status: descriptor.status(),
            });
        }

        self.index.insert(key, self.entries.len());
        self.entries.push(descriptor);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finalize(self) -> Result<Registry, RegistryError> {
        if self.entries.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }

        Ok(Registry {
            entries: self.entries,
            index: self.index,
        })
    }
}

/// Counts reported at startup and by `catalog check`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogHealth {
    pub total: usize,
    pub stubs: usize,
    pub implemented: usize,
    pub lazy_heavy: usize,
}

impl CatalogHealth {
    /// Share of entries with a real or deferred implementation
    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.implemented + self.lazy_heavy) as f64 / self.total as f64
    }
}

/// Frozen catalog produced by one discovery pass.
///
/// There are no mutators; [`Registry::promote`] returns a new instance.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<ComponentDescriptor>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn lookup(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.index
            .get(&ComponentName::normalize(name))
            .map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.entries.iter()
    }

    pub fn with_status(
        &self,
        status: ComponentStatus,
    ) -> impl Iterator<Item = &ComponentDescriptor> {
        self.entries.iter().filter(move |d| d.status() == status)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn health(&self) -> CatalogHealth {
        self.entries
            .iter()
            .fold(CatalogHealth::default(), |mut health, d| {
                health.total += 1;
                match d.status() {
                    ComponentStatus::Stub => health.stubs += 1,
                    ComponentStatus::Implemented => health.implemented += 1,
                    ComponentStatus::LazyHeavy => health.lazy_heavy += 1,
                }
                health
            })
    }

    /// Replace the Stub descriptor for `name` with an Implemented one,
    /// returning a new registry. `self` is left untouched.
    pub fn promote(&self, name: &str, props: PropsContract) -> Result<Registry, RegistryError> {
        let &i = self
            .index
            .get(&ComponentName::normalize(name))
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })?;

        let promoted = self.entries[i].promote(props)?;
        let mut next = self.clone();
        next.entries[i] = promoted;
        Ok(next)
    }

    /// Render a catalog entry. Never fails: an unregistered name degrades to
    /// a generated stub so presentation can always show something.
    pub fn render(&self, name: &str, children: Option<&str>, class_name: Option<&str>) -> Rendered {
        match self.lookup(name) {
            Some(descriptor) => stub::render(descriptor, children, class_name),
            None => {
                tracing::debug!("Registry: {} not registered, rendering placeholder stub", name);
                stub::render(&stub::make_stub(name), children, class_name)
            }
        }
    }
}

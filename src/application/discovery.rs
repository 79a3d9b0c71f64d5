//! Discovery pass: run every component source and freeze the result.
//!
//! Each run builds a fresh [`RegistryBuilder`]; two passes never share state,
//! and a pass is authoritative for the registry it returns.

use crate::domain::catalog::builtin::builtin_descriptors;
use crate::domain::catalog::{ComponentDescriptor, Registry, RegistryBuilder};
use crate::domain::errors::DiscoveryError;
use crate::domain::ports::ComponentSource;
use tracing::{debug, error, info};

/// Source backed by the built-in component table
#[derive(Debug, Default)]
pub struct BuiltinSource;

impl ComponentSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    fn discover(&self) -> Result<Vec<ComponentDescriptor>, DiscoveryError> {
        Ok(builtin_descriptors().collect())
    }
}

/// Fixed list of descriptors, mostly useful for tests and embedding
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    descriptors: Vec<ComponentDescriptor>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, descriptors: Vec<ComponentDescriptor>) -> Self {
        Self {
            name: name.into(),
            descriptors,
        }
    }
}

impl ComponentSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn discover(&self) -> Result<Vec<ComponentDescriptor>, DiscoveryError> {
        Ok(self.descriptors.clone())
    }
}

#[derive(Default)]
pub struct DiscoveryPass {
    sources: Vec<Box<dyn ComponentSource>>,
}

impl DiscoveryPass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl ComponentSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Collect descriptors from every source, sort them by normalized name
    /// and register them. Sorting makes the reported duplicate reproducible
    /// regardless of the order sources or directories were traversed in.
    pub fn run(&self) -> Result<Registry, DiscoveryError> {
        let mut discovered = Vec::new();
        for source in &self.sources {
            let found = source.discover()?;
            debug!("Registry: source '{}' discovered {} component(s)", source.name(), found.len());
            discovered.extend(found);
        }

        discovered.sort_by(|a, b| {
            a.name()
                .key()
                .cmp(b.name().key())
                .then_with(|| a.name().as_str().cmp(b.name().as_str()))
        });

        let mut builder = RegistryBuilder::new();
        for descriptor in discovered {
            if let Err(e) = builder.register(descriptor) {
                error!("Registry: discovery pass aborted: {}", e);
                return Err(e.into());
            }
        }

        let registry = builder.finalize()?;
        let health = registry.health();
        info!(
            "Registry: {} components ({} stub, {} implemented, {} lazy-heavy)",
            health.total, health.stubs, health.implemented, health.lazy_heavy
        );
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ComponentStatus, PropsContract, make_stub};
    use crate::domain::errors::RegistryError;

    fn scenario() -> Vec<ComponentDescriptor> {
        vec![
            make_stub("Alert"),
            make_stub("Card"),
            ComponentDescriptor::lazy_heavy("PDFViewer", PropsContract::standard().required("src")),
        ]
    }

    #[test]
    fn test_builtin_pass_succeeds() {
        let registry = DiscoveryPass::new().with_source(BuiltinSource).run().unwrap();
        assert_eq!(registry.len(), crate::domain::catalog::builtin::BUILTIN_CATALOG.len());
        assert!(registry.lookup("button").is_some());
    }

    #[test]
    fn test_order_does_not_affect_result() {
        let mut reversed = scenario();
        reversed.reverse();

        let a = DiscoveryPass::new()
            .with_source(StaticSource::new("a", scenario()))
            .run()
            .unwrap();
        let b = DiscoveryPass::new()
            .with_source(StaticSource::new("b", reversed))
            .run()
            .unwrap();

        let names_a: Vec<_> = a.iter().map(|d| d.name().to_string()).collect();
        let names_b: Vec<_> = b.iter().map(|d| d.name().to_string()).collect();
        assert_eq!(names_a, names_b);
        assert_eq!(names_a, vec!["Alert", "Card", "PDFViewer"]);
        assert_eq!(a.lookup("pdfviewer").unwrap().status(), ComponentStatus::LazyHeavy);
    }

    #[test]
    fn test_duplicate_across_sources_is_reported_deterministically() {
        let pass = DiscoveryPass::new()
            .with_source(StaticSource::new("first", vec![make_stub("card"), make_stub("Zebra")]))
            .with_source(StaticSource::new("second", vec![make_stub("Card"), make_stub("zebra")]));

        let err = pass.run().unwrap_err();
        // "Card" and "card" share a key; uppercase sorts first within it.
        assert!(matches!(
            err,
            DiscoveryError::Registry(RegistryError::DuplicateName { ref name, ref existing })
                if name == "card" && existing == "Card"
        ));
    }

    #[test]
    fn test_empty_pass_fails() {
        let err = DiscoveryPass::new().run().unwrap_err();
        assert!(matches!(err, DiscoveryError::Registry(RegistryError::EmptyRegistry)));
    }

    #[test]
    fn test_passes_are_independent() {
        let pass = DiscoveryPass::new().with_source(StaticSource::new("s", scenario()));
        let first = pass.run().unwrap();
        let promoted = first.promote("Card", PropsContract::standard()).unwrap();
        let second = pass.run().unwrap();

        assert_eq!(promoted.lookup("Card").unwrap().status(), ComponentStatus::Implemented);
        assert_eq!(second.lookup("Card").unwrap().status(), ComponentStatus::Stub);
    }
}

use designkit::application::discovery::{DiscoveryPass, StaticSource};
use designkit::domain::catalog::{
    ComponentDescriptor, ComponentStatus, PropsContract, RenderBody, make_stub,
};
use designkit::domain::errors::{DiscoveryError, RegistryError};
use designkit::infrastructure::{DirectorySource, ManifestSource};
use std::fs;
use tempfile::TempDir;

fn scenario_pass() -> DiscoveryPass {
    DiscoveryPass::new().with_source(StaticSource::new(
        "scenario",
        vec![
            make_stub("Alert"),
            make_stub("Card"),
            ComponentDescriptor::lazy_heavy("PDFViewer", PropsContract::standard().required("src")),
        ],
    ))
}

#[test]
fn test_stub_scenario() {
    let registry = scenario_pass().run().unwrap();

    let health = registry.health();
    assert_eq!(health.total, 3);
    assert_eq!(health.stubs, 2);
    assert_eq!(health.lazy_heavy, 1);

    let rendered = registry.render("Card", None, None);
    assert_eq!(rendered.text(), Some("Card Component (Stub)"));

    let with_children = registry.render("Card", Some("Hello"), Some("p-4"));
    assert_eq!(with_children.body, RenderBody::Children("Hello".to_string()));
    assert_eq!(with_children.class_name.as_deref(), Some("p-4"));

    assert_eq!(
        registry.lookup("pdfviewer").map(|d| d.status()),
        Some(ComponentStatus::LazyHeavy)
    );
}

#[test]
fn test_unregistered_render_degrades() {
    let registry = scenario_pass().run().unwrap();
    let rendered = registry.render("Sparkline", None, None);
    assert!(rendered.is_fallback());
    assert_eq!(rendered.text(), Some("Sparkline Component (Stub)"));
}

#[test]
fn test_promotion_is_a_new_registry() {
    let registry = scenario_pass().run().unwrap();
    let promoted = registry
        .promote("card", PropsContract::standard().optional("variant"))
        .unwrap();

    assert_eq!(registry.lookup("Card").unwrap().status(), ComponentStatus::Stub);
    assert_eq!(promoted.lookup("Card").unwrap().status(), ComponentStatus::Implemented);

    let err = promoted.promote("PDFViewer", PropsContract::standard()).unwrap_err();
    assert!(matches!(err, RegistryError::IllegalTransition { .. }));
}

#[test]
fn test_implemented_without_props_rejected() {
    let err = DiscoveryPass::new()
        .with_source(StaticSource::new(
            "bad",
            vec![ComponentDescriptor::implemented("Chart", PropsContract::new())],
        ))
        .run()
        .unwrap_err();

    assert!(matches!(
        err,
        DiscoveryError::Registry(RegistryError::InvalidStatus { .. })
    ));
}

#[test]
fn test_manifest_and_directory_collide_case_insensitively() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("components.toml");
    fs::write(
        &manifest,
        "[[components]]\nname = \"DataTable\"\nstatus = \"Implemented\"\nprops = [\"rows\"]\n",
    )
    .unwrap();
    let src = dir.path().join("components");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("data-table.tsx"), "").unwrap();

    let pass = DiscoveryPass::new()
        .with_source(ManifestSource::new(&manifest))
        .with_source(DirectorySource::new(&src));

    let first = pass.run().unwrap_err().to_string();
    let second = pass.run().unwrap_err().to_string();
    assert_eq!(first, second);
    assert!(first.contains("DataTable"));
}

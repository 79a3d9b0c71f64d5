use anyhow::Result;
use async_trait::async_trait;
use designkit::application::lazy_loader::{LazyResolver, RetryPolicy};
use designkit::domain::catalog::{
    ComponentDescriptor, ComponentName, PropsContract, RegistryBuilder,
};
use designkit::domain::errors::LoadError;
use designkit::domain::ports::{LoadedModule, ModuleFetcher};
use designkit::infrastructure::FsModuleFetcher;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

// Fetcher that hangs on one component and serves the rest
struct HangingFetcher {
    hang_on: &'static str,
    calls: AtomicUsize,
}

#[async_trait]
impl ModuleFetcher for HangingFetcher {
    async fn fetch(&self, name: &ComponentName) -> Result<LoadedModule> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if name.as_str() == self.hang_on {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        Ok(LoadedModule {
            component: name.to_string(),
            resource: format!("lazy/{}.js", name.to_kebab()),
            bytes: vec![0; 16],
        })
    }
}

fn registry() -> Arc<designkit::domain::catalog::Registry> {
    let mut builder = RegistryBuilder::new();
    for name in ["PdfViewer", "VideoPlayer"] {
        builder
            .register(ComponentDescriptor::lazy_heavy(
                name,
                PropsContract::standard().required("src"),
            ))
            .unwrap();
    }
    Arc::new(builder.finalize().unwrap())
}

#[tokio::test]
async fn test_cancelled_load_leaves_others_unaffected() {
    let fetcher = Arc::new(HangingFetcher {
        hang_on: "PdfViewer",
        calls: AtomicUsize::new(0),
    });
    let resolver = LazyResolver::new(registry(), fetcher.clone(), RetryPolicy::default());

    let cancelled =
        tokio::time::timeout(Duration::from_millis(20), resolver.resolve("PdfViewer")).await;
    assert!(cancelled.is_err());
    assert!(!resolver.is_loaded("PdfViewer"));

    assert_ok!(resolver.resolve("VideoPlayer").await);
    assert!(resolver.is_loaded("VideoPlayer"));
}

#[tokio::test]
async fn test_filesystem_bundles() {
    let dist = TempDir::new().unwrap();
    std::fs::create_dir(dist.path().join("lazy")).unwrap();
    std::fs::write(dist.path().join("lazy/video-player.js"), "export default {}").unwrap();

    let resolver = LazyResolver::new(
        registry(),
        Arc::new(FsModuleFetcher::new(dist.path())),
        RetryPolicy::new(2, Duration::from_millis(1)),
    );

    let module = assert_ok!(resolver.resolve("videoplayer").await);
    assert_eq!(module.size(), "export default {}".len());

    let err = assert_err!(resolver.resolve("PdfViewer").await);
    assert!(matches!(err, LoadError::Fetch { attempts: 2, .. }));
}

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::application::discovery::{BuiltinSource, DiscoveryPass};
use crate::application::lazy_loader::LazyResolver;
use crate::config::{CatalogEnvConfig, Config};
use crate::domain::catalog::{ComponentKind, Registry};
use crate::domain::routes::PlaceholderResolver;
use crate::domain::routes::dashboard::dashboard_resolver;
use crate::domain::tokens::TokenStore;
use crate::domain::tokens::defaults::default_store;
use crate::infrastructure::documents::{load_routes, load_token_store};
use crate::infrastructure::module_fetcher::FsModuleFetcher;
use crate::infrastructure::observability::{Metrics, MetricsReporter};
use crate::infrastructure::showcase::{ListeningHandle, ShowcaseServer};
use crate::infrastructure::sources::{DirectorySource, ManifestSource};

/// Component sources for one discovery pass. A manifest replaces the
/// built-in table; a scan directory adds stubs on top of either.
pub fn discovery_pass(config: &CatalogEnvConfig) -> DiscoveryPass {
    let pass = match &config.manifest {
        Some(path) => DiscoveryPass::new().with_source(ManifestSource::new(path)),
        None => DiscoveryPass::new().with_source(BuiltinSource),
    };

    match &config.scan_dir {
        Some(dir) => pass.with_source(DirectorySource::new(dir).with_kind(ComponentKind::Core)),
        None => pass,
    }
}

pub fn build_tokens(config: &CatalogEnvConfig) -> Result<TokenStore> {
    match &config.tokens_file {
        Some(path) => load_token_store(path),
        None => {
            let store = default_store();
            info!(
                "TokenStore: using built-in defaults ({} tokens, version {})",
                store.len(),
                store.version()
            );
            Ok(store)
        }
    }
}

pub fn build_routes(config: &CatalogEnvConfig) -> Result<PlaceholderResolver> {
    match &config.routes_file {
        Some(path) => load_routes(path),
        None => Ok(dashboard_resolver()),
    }
}

pub struct SystemHandle {
    pub server: ListeningHandle,
    pub tokens: Arc<TokenStore>,
    pub registry: Arc<Registry>,
    pub routes: Arc<PlaceholderResolver>,
    pub metrics: Metrics,
}

/// Every build-time artifact of the catalog: tokens, registry and routes.
/// Any failure here aborts startup.
pub struct Application {
    pub config: Config,
    pub tokens: Arc<TokenStore>,
    pub registry: Arc<Registry>,
    pub routes: Arc<PlaceholderResolver>,
    pub metrics: Metrics,
}

impl Application {
    pub fn build(config: Config) -> Result<Self> {
        info!("Building designkit catalog...");

        let metrics = Metrics::new()?;

        let tokens =
            Arc::new(build_tokens(&config.catalog).context("Failed to build token store")?);
        metrics.record_tokens(&tokens);

        let registry = Arc::new(
            discovery_pass(&config.catalog)
                .run()
                .context("Component discovery failed")?,
        );
        metrics.record_catalog(&registry.health());

        let routes = Arc::new(
            build_routes(&config.catalog).context("Failed to build dashboard routes")?,
        );
        info!(
            "Routes: {} dashboard routes, {} still placeholders",
            routes.len(),
            routes.placeholder_count()
        );

        Ok(Self {
            config,
            tokens,
            registry,
            routes,
            metrics,
        })
    }

    pub fn lazy_resolver(&self) -> LazyResolver {
        LazyResolver::new(
            self.registry.clone(),
            Arc::new(FsModuleFetcher::new(&self.config.showcase.dist_dir)),
            self.config.retry_policy(),
        )
        .with_metrics(self.metrics.clone())
    }

    pub async fn start(self) -> Result<SystemHandle> {
        let server = ShowcaseServer::new(self.config.showcase.clone(), self.registry.clone())
            .start()
            .await?;

        if self.config.observability.enabled {
            let reporter = MetricsReporter::new(
                self.tokens.clone(),
                self.registry.clone(),
                self.metrics.clone(),
                self.config.observability.interval_seconds,
            );
            tokio::spawn(async move {
                reporter.run().await;
            });
            info!(
                "Metrics reporter started (interval: {}s)",
                self.config.observability.interval_seconds
            );
        } else {
            info!("Metrics reporting disabled.");
        }

        Ok(SystemHandle {
            server,
            tokens: self.tokens,
            registry: self.registry,
            routes: self.routes,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::builtin::BUILTIN_CATALOG;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_build() {
        let app = Application::build(Config::default()).unwrap();
        assert_eq!(app.registry.len(), BUILTIN_CATALOG.len());
        assert_eq!(app.tokens.version(), crate::domain::tokens::defaults::DEFAULT_VERSION);
        assert!(!app.routes.is_empty());
    }

    #[tokio::test]
    async fn test_started_system_exposes_catalog_and_routes() {
        let dist = TempDir::new().unwrap();
        fs::write(dist.path().join("index.html"), "<div id=\"root\"></div>").unwrap();

        let config = Config {
            showcase: crate::config::ShowcaseEnvConfig {
                port: 0,
                dist_dir: dist.path().to_path_buf(),
                ..Default::default()
            },
            observability: crate::config::ObservabilityEnvConfig {
                enabled: false,
                ..Default::default()
            },
            ..Config::default()
        };

        let handle = Application::build(config).unwrap().start().await.unwrap();
        assert_eq!(handle.registry.len(), BUILTIN_CATALOG.len());
        assert_eq!(handle.routes.len(), dashboard_resolver().len());
        assert!(handle.server.local_addr().port() != 0);

        handle.server.shutdown().await.unwrap();
    }

    #[test]
    fn test_manifest_replaces_builtin_and_scan_adds() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("components.toml");
        fs::write(&manifest, "[[components]]\nname = \"Alert\"\n").unwrap();
        let scan = dir.path().join("src");
        fs::create_dir(&scan).unwrap();
        fs::write(scan.join("card.tsx"), "").unwrap();

        let config = CatalogEnvConfig {
            manifest: Some(manifest),
            scan_dir: Some(scan),
            ..CatalogEnvConfig::default()
        };
        let registry = discovery_pass(&config).run().unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("alert"));
        assert!(registry.contains("card"));
    }

    #[test]
    fn test_scan_duplicating_builtin_aborts_build() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("button.tsx"), "").unwrap();

        let config = Config {
            catalog: CatalogEnvConfig {
                scan_dir: Some(dir.path().to_path_buf()),
                ..CatalogEnvConfig::default()
            },
            ..Config::default()
        };

        let err = Application::build(config).err().unwrap();
        assert!(format!("{:#}", err).contains("Duplicate"));
    }

    #[test]
    fn test_broken_token_file_aborts_build() {
        let dir = TempDir::new().unwrap();
        let tokens = dir.path().join("tokens.toml");
        fs::write(
            &tokens,
            "version = 1\n[color]\nprimary = \"#2563eb\"\n[z-index]\nmodal = 50\n",
        )
        .unwrap();

        let config = Config {
            catalog: CatalogEnvConfig {
                tokens_file: Some(tokens),
                ..CatalogEnvConfig::default()
            },
            ..Config::default()
        };

        assert!(Application::build(config).is_err());
    }
}

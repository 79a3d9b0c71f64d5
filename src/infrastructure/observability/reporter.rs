//! Push-based metrics reporter for the showcase
//!
//! Periodically outputs a catalog snapshot as structured JSON to stdout.

use crate::domain::catalog::{CatalogHealth, Registry};
use crate::domain::tokens::TokenStore;
use crate::infrastructure::observability::metrics::Metrics;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Metrics snapshot for JSON output
#[derive(Debug, Serialize)]
pub struct CatalogSnapshot {
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub token_version: u32,
    pub token_count: usize,
    pub catalog: CatalogHealth,
}

impl CatalogSnapshot {
    pub fn capture(store: &TokenStore, registry: &Registry, uptime: Duration) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: uptime.as_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            token_version: store.version(),
            token_count: store.len(),
            catalog: registry.health(),
        }
    }
}

pub struct MetricsReporter {
    tokens: Arc<TokenStore>,
    registry: Arc<Registry>,
    metrics: Metrics,
    start_time: Instant,
    interval: Duration,
}

impl MetricsReporter {
    pub fn new(
        tokens: Arc<TokenStore>,
        registry: Arc<Registry>,
        metrics: Metrics,
        interval_seconds: u64,
    ) -> Self {
        Self {
            tokens,
            registry,
            metrics,
            start_time: Instant::now(),
            interval: Duration::from_secs(interval_seconds.max(1)),
        }
    }

    /// Run the reporter in a loop, outputting metrics periodically
    pub async fn run(self) {
        info!(
            "MetricsReporter: Starting push-based metrics (interval: {:?})",
            self.interval
        );

        loop {
            tokio::time::sleep(self.interval).await;

            let snapshot = self.collect_snapshot();
            match serde_json::to_string(&snapshot) {
                Ok(json) => {
                    println!("METRICS_JSON:{}", json);
                    info!(
                        "Catalog: {} components ({} stub) | Tokens: v{} | Uptime: {}s",
                        snapshot.catalog.total,
                        snapshot.catalog.stubs,
                        snapshot.token_version,
                        snapshot.uptime_seconds
                    );
                }
                Err(e) => warn!("MetricsReporter: Failed to serialize metrics: {}", e),
            }
            debug!("MetricsReporter: prometheus exposition\n{}", self.metrics.render());
        }
    }

    fn collect_snapshot(&self) -> CatalogSnapshot {
        let snapshot = CatalogSnapshot::capture(
            &self.tokens,
            &self.registry,
            self.start_time.elapsed(),
        );

        self.metrics.record_catalog(&snapshot.catalog);
        self.metrics.record_tokens(&self.tokens);
        self.metrics.uptime_seconds.set(snapshot.uptime_seconds as f64);

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::discovery::{BuiltinSource, DiscoveryPass};
    use crate::domain::tokens::defaults::default_store;

    #[test]
    fn test_snapshot_collection() {
        let tokens = Arc::new(default_store());
        let registry = Arc::new(DiscoveryPass::new().with_source(BuiltinSource).run().unwrap());
        let metrics = Metrics::new().expect("Failed to create metrics");
        let reporter = MetricsReporter::new(tokens.clone(), registry.clone(), metrics.clone(), 60);

        let snapshot = reporter.collect_snapshot();

        assert_eq!(snapshot.catalog, registry.health());
        assert_eq!(snapshot.token_count, tokens.len());
        assert!(!snapshot.timestamp.is_empty());
        assert_eq!(
            metrics.components_total.with_label_values(&["stub"]).get() as usize,
            registry.health().stubs
        );
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = CatalogSnapshot {
            timestamp: "2026-01-10T10:00:00Z".to_string(),
            uptime_seconds: 3600,
            version: "0.1.0".to_string(),
            token_version: 4,
            token_count: 42,
            catalog: CatalogHealth {
                total: 3,
                stubs: 2,
                implemented: 0,
                lazy_heavy: 1,
            },
        };

        let json = serde_json::to_string(&snapshot).expect("Failed to serialize");
        assert!(json.contains("\"token_version\":4"));
        assert!(json.contains("\"lazy_heavy\":1"));
    }
}

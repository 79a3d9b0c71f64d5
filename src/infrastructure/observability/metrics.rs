//! Prometheus metrics definitions for the catalog
//!
//! All metrics use the `designkit_` prefix and are read-only.

use crate::domain::catalog::CatalogHealth;
use crate::domain::tokens::TokenStore;
use prometheus::{CounterVec, Gauge, GaugeVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Registered components per status
    pub components_total: GaugeVec,
    /// Tokens per category
    pub tokens_total: GaugeVec,
    /// Version of the loaded token document
    pub token_version: Gauge,
    /// Lazy component loads by outcome (success, failure)
    pub lazy_loads_total: CounterVec,
    /// Uptime in seconds
    pub uptime_seconds: Gauge,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let components_total = GaugeVec::new(
            Opts::new("designkit_components_total", "Registered components per status"),
            &["status"],
        )?;
        registry.register(Box::new(components_total.clone()))?;

        let tokens_total = GaugeVec::new(
            Opts::new("designkit_tokens_total", "Design tokens per category"),
            &["category"],
        )?;
        registry.register(Box::new(tokens_total.clone()))?;

        let token_version = Gauge::with_opts(Opts::new(
            "designkit_token_version",
            "Version of the loaded token document",
        ))?;
        registry.register(Box::new(token_version.clone()))?;

        let lazy_loads_total = CounterVec::new(
            Opts::new("designkit_lazy_loads_total", "Lazy component loads by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(lazy_loads_total.clone()))?;

        let uptime_seconds = Gauge::with_opts(Opts::new(
            "designkit_uptime_seconds",
            "Showcase uptime in seconds",
        ))?;
        registry.register(Box::new(uptime_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            components_total,
            tokens_total,
            token_version,
            lazy_loads_total,
            uptime_seconds,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    pub fn record_catalog(&self, health: &CatalogHealth) {
        for (status, count) in [
            ("stub", health.stubs),
            ("implemented", health.implemented),
            ("lazy_heavy", health.lazy_heavy),
        ] {
            self.components_total
                .with_label_values(&[status])
                .set(count as f64);
        }
    }

    pub fn record_tokens(&self, store: &TokenStore) {
        for category in store.categories() {
            self.tokens_total
                .with_label_values(&[category.as_str()])
                .set(store.count(category) as f64);
        }
        self.token_version.set(f64::from(store.version()));
    }
}

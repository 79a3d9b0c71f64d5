//! Configuration module for designkit.
//!
//! Structured configuration loading from environment variables, organized
//! by concern: Showcase server, Catalog sources and Observability.

mod catalog_config;
mod observability_config;
mod showcase_config;

pub use catalog_config::CatalogEnvConfig;
pub use observability_config::ObservabilityEnvConfig;
pub use showcase_config::ShowcaseEnvConfig;

use crate::application::lazy_loader::RetryPolicy;
use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub showcase: ShowcaseEnvConfig,
    pub catalog: CatalogEnvConfig,
    pub observability: ObservabilityEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let showcase = ShowcaseEnvConfig::from_env().context("Failed to load showcase config")?;
        let catalog = CatalogEnvConfig::from_env().context("Failed to load catalog config")?;
        let observability = ObservabilityEnvConfig::from_env();

        Ok(Self {
            showcase,
            catalog,
            observability,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.catalog.lazy_retry_attempts, self.catalog.lazy_retry_delay)
    }
}

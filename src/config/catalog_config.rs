//! Token, component and route source configuration.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEnvConfig {
    /// TOML token document; built-in defaults when unset
    pub tokens_file: Option<PathBuf>,
    /// TOML component manifest replacing the built-in table
    pub manifest: Option<PathBuf>,
    /// Component source directory scanned for stubs
    pub scan_dir: Option<PathBuf>,
    /// TOML route document replacing the built-in dashboard routes
    pub routes_file: Option<PathBuf>,
    pub lazy_retry_attempts: u32,
    pub lazy_retry_delay: Duration,
}

impl Default for CatalogEnvConfig {
    fn default() -> Self {
        Self {
            tokens_file: None,
            manifest: None,
            scan_dir: None,
            routes_file: None,
            lazy_retry_attempts: 3,
            lazy_retry_delay: Duration::from_millis(1000),
        }
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

impl CatalogEnvConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let lazy_retry_attempts = match env::var("LAZY_RETRY_ATTEMPTS") {
            Ok(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("Invalid LAZY_RETRY_ATTEMPTS: {}", raw))?,
            Err(_) => defaults.lazy_retry_attempts,
        };

        let lazy_retry_delay = match env::var("LAZY_RETRY_DELAY_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse::<u64>()
                    .with_context(|| format!("Invalid LAZY_RETRY_DELAY_MS: {}", raw))?,
            ),
            Err(_) => defaults.lazy_retry_delay,
        };

        Ok(Self {
            tokens_file: optional_path("TOKENS_FILE"),
            manifest: optional_path("CATALOG_MANIFEST"),
            scan_dir: optional_path("CATALOG_SCAN_DIR"),
            routes_file: optional_path("DASHBOARD_ROUTES"),
            lazy_retry_attempts,
            lazy_retry_delay,
        })
    }
}

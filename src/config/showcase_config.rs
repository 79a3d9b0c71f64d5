//! Showcase server configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseEnvConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    /// Directory holding the built showcase assets
    pub dist_dir: PathBuf,
    /// SPA entry document, relative to `dist_dir`
    pub entry: String,
}

impl Default for ShowcaseEnvConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            dist_dir: PathBuf::from("dist"),
            entry: "index.html".to_string(),
        }
    }
}

impl ShowcaseEnvConfig {
    /// The port is deployed exactly as configured, so a value that does not
    /// parse is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bind_address = match env::var("SHOWCASE_BIND_ADDRESS") {
            Ok(raw) => raw
                .parse::<IpAddr>()
                .with_context(|| format!("Invalid SHOWCASE_BIND_ADDRESS: {}", raw))?,
            Err(_) => defaults.bind_address,
        };

        let port = match env::var("SHOWCASE_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid SHOWCASE_PORT: {}", raw))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            bind_address,
            port,
            dist_dir: env::var("SHOWCASE_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dist_dir),
            entry: env::var("SHOWCASE_ENTRY").unwrap_or(defaults.entry),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn entry_path(&self) -> PathBuf {
        self.dist_dir.join(&self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_config_defaults() {
        let config = ShowcaseEnvConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.entry_path(), PathBuf::from("dist/index.html"));
    }
}

//! Showcase HTTP server.
//!
//! Serves the built showcase assets. Any path that is not an existing asset
//! is answered with the SPA entry document and a 200, so client-side routing
//! owns deep links. The surface is `GET /*` only.

use crate::config::ShowcaseEnvConfig;
use crate::domain::catalog::Registry;
use crate::domain::errors::ServerError;
use axum::Router;
use axum::http::HeaderValue;
use axum::http::header::CACHE_CONTROL;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub fn build_router(dist_dir: &Path, entry: &str) -> Router {
    let spa_entry = ServeFile::new(dist_dir.join(entry));
    let assets = ServeDir::new(dist_dir)
        .append_index_html_on_directories(false)
        .fallback(spa_entry);

    Router::new()
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
}

pub struct ShowcaseServer {
    config: ShowcaseEnvConfig,
    registry: Arc<Registry>,
}

impl ShowcaseServer {
    pub fn new(config: ShowcaseEnvConfig, registry: Arc<Registry>) -> Self {
        Self { config, registry }
    }

    /// Bind the configured address and start serving in the background.
    ///
    /// Binding happens exactly once on the configured port; a failure is
    /// returned as [`ServerError::Bind`] and no other port is tried.
    pub async fn start(self) -> Result<ListeningHandle, ServerError> {
        let entry_path = self.config.entry_path();
        let entry_exists = tokio::fs::metadata(&entry_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !entry_exists {
            error!("ShowcaseServer: entry document {} not found", entry_path.display());
            return Err(ServerError::MissingEntryDocument { path: entry_path });
        }

        let health = self.registry.health();
        info!(
            "ShowcaseServer: catalog has {} components, {} still stubs",
            health.total, health.stubs
        );

        let addr = self.config.socket_addr();
        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("ShowcaseServer: Failed to bind to {}: {}", addr, e);
                if e.kind() == io::ErrorKind::AddrInUse {
                    error!("ShowcaseServer: Port {} is already in use", addr.port());
                }
                return Err(ServerError::Bind { addr, source: e });
            }
        };
        let local_addr = listener.local_addr()?;

        let router = build_router(&self.config.dist_dir, &self.config.entry);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
        });

        info!(
            "ShowcaseServer: serving {} on http://{}",
            self.config.dist_dir.display(),
            local_addr
        );

        Ok(ListeningHandle {
            local_addr,
            dist_dir: self.config.dist_dir,
            shutdown: Some(shutdown_tx),
            task,
        })
    }
}

/// A running showcase server
pub struct ListeningHandle {
    local_addr: SocketAddr,
    dist_dir: PathBuf,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<io::Result<()>>,
}

impl ListeningHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }

    /// Stop accepting connections and wait for in-flight requests.
    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown.take() {
            // Receiver is gone only if the server already stopped.
            let _ = tx.send(());
        }
        self.wait().await
    }

    /// Wait until the server stops on its own.
    pub async fn wait(self) -> Result<(), ServerError> {
        let result = self
            .task
            .await
            .map_err(|e| ServerError::Serve(io::Error::other(e)))?;
        info!("ShowcaseServer: stopped");
        result.map_err(ServerError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::discovery::{BuiltinSource, DiscoveryPass};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn dist() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<div id=\"root\"></div>").unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/app.js"), "console.log(1)").unwrap();
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_asset_served_verbatim() {
        let dir = dist();
        let (status, body) = get(build_router(dir.path(), "index.html"), "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log(1)");
    }

    #[tokio::test]
    async fn test_deep_link_gets_entry_document() {
        let dir = dist();
        let router = build_router(dir.path(), "index.html");
        let (status, body) = get(router, "/components/card/variants").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<div id=\"root\"></div>");
    }

    #[tokio::test]
    async fn test_asset_directory_gets_entry_document() {
        let dir = dist();
        for uri in ["/assets", "/assets/", "/"] {
            let (status, body) = get(build_router(dir.path(), "index.html"), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, b"<div id=\"root\"></div>", "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_cache_control_header() {
        let dir = dist();
        let response = build_router(dir.path(), "index.html")
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-cache");
    }

    #[tokio::test]
    async fn test_missing_entry_document() {
        let dir = TempDir::new().unwrap();
        let config = ShowcaseEnvConfig {
            port: 0,
            dist_dir: dir.path().to_path_buf(),
            ..ShowcaseEnvConfig::default()
        };
        let registry = Arc::new(DiscoveryPass::new().with_source(BuiltinSource).run().unwrap());

        let err = ShowcaseServer::new(config, registry).start().await.err().unwrap();
        assert!(matches!(err, ServerError::MissingEntryDocument { .. }));
    }
}

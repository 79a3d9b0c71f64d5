use designkit::application::discovery::{BuiltinSource, DiscoveryPass};
use designkit::config::ShowcaseEnvConfig;
use designkit::domain::catalog::Registry;
use designkit::domain::errors::ServerError;
use designkit::infrastructure::ShowcaseServer;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

const ENTRY: &str = "<!doctype html><div id=\"root\"></div>";

fn dist() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), ENTRY).unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(
        dir.path().join("assets/index-3f2a.css"),
        ":root{--color-primary:#2563eb}",
    )
    .unwrap();
    dir
}

fn registry() -> Arc<Registry> {
    Arc::new(DiscoveryPass::new().with_source(BuiltinSource).run().unwrap())
}

fn config(dir: &TempDir, port: u16) -> ShowcaseEnvConfig {
    ShowcaseEnvConfig {
        bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port,
        dist_dir: dir.path().to_path_buf(),
        entry: "index.html".to_string(),
    }
}

async fn http_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path);
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_serves_assets_and_spa_fallback() {
    let dir = dist();
    let handle = ShowcaseServer::new(config(&dir, 0), registry())
        .start()
        .await
        .unwrap();
    let addr = handle.local_addr();

    let asset = http_get(addr, "/assets/index-3f2a.css").await;
    assert!(asset.starts_with("HTTP/1.1 200"));
    assert!(asset.ends_with(":root{--color-primary:#2563eb}"));

    let deep_link = http_get(addr, "/some/unknown/deep/link").await;
    assert!(deep_link.starts_with("HTTP/1.1 200"));
    assert!(deep_link.ends_with(ENTRY));

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_port_in_use_is_bind_error() {
    let dir = dist();
    let occupied = std::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    let port = occupied.local_addr().unwrap().port();

    let result = ShowcaseServer::new(config(&dir, port), registry()).start().await;

    match result {
        Err(ServerError::Bind { addr, .. }) => assert_eq!(addr.port(), port),
        Err(other) => panic!("expected bind error, got {}", other),
        Ok(_) => panic!("bound an occupied port"),
    }
}

#[tokio::test]
async fn test_missing_entry_document_refuses_to_start() {
    let dir = TempDir::new().unwrap();
    let result = ShowcaseServer::new(config(&dir, 0), registry()).start().await;
    assert!(matches!(result, Err(ServerError::MissingEntryDocument { .. })));
}

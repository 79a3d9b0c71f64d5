//! Loading of TOML token and route documents.

use crate::domain::routes::{PlaceholderResolver, RouteDocument};
use crate::domain::tokens::{TokenDocument, TokenStore};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn load_token_store(path: &Path) -> Result<TokenStore> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read token document {}", path.display()))?;
    let document: TokenDocument = toml::from_str(&text)
        .with_context(|| format!("Failed to parse token document {}", path.display()))?;
    let store = document
        .into_store()
        .with_context(|| format!("Invalid token document {}", path.display()))?;

    info!(
        "TokenStore: loaded {} tokens (version {}) from {}",
        store.len(),
        store.version(),
        path.display()
    );
    Ok(store)
}

pub fn save_token_store(store: &TokenStore, path: &Path) -> Result<()> {
    let text = toml::to_string_pretty(&TokenDocument::from_store(store))
        .context("Failed to serialize token document")?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn load_routes(path: &Path) -> Result<PlaceholderResolver> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read route document {}", path.display()))?;
    let document: RouteDocument = toml::from_str(&text)
        .with_context(|| format!("Failed to parse route document {}", path.display()))?;

    let resolver = PlaceholderResolver::from_declarations(document.routes);
    info!(
        "Routes: {} declared ({} placeholder) from {}",
        resolver.len(),
        resolver.placeholder_count(),
        path.display()
    );
    Ok(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tokens::defaults::default_store;
    use crate::domain::tokens::{TokenCategory, TokenValue};
    use tempfile::TempDir;

    #[test]
    fn test_token_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens.toml");
        let store = default_store();

        save_token_store(&store, &path).unwrap();
        let loaded = load_token_store(&path).unwrap();

        assert_eq!(loaded, store);
    }

    #[test]
    fn test_token_file_unknown_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens.toml");
        fs::write(&path, "version = 1\n[opacity]\nmuted = \"0.5\"\n").unwrap();

        let err = load_token_store(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse token document"));
    }

    #[test]
    fn test_token_file_values_kept_opaque() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens.toml");
        fs::write(
            &path,
            "version = 7\n[color]\nprimary = \"#2563eb\"\n[spacing]\nunit = 4\n",
        )
        .unwrap();

        let store = load_token_store(&path).unwrap();
        assert_eq!(store.version(), 7);
        assert_eq!(
            store.resolve(TokenCategory::Color, "primary").unwrap(),
            &TokenValue::Text("#2563eb".to_string())
        );
        assert_eq!(
            store.resolve(TokenCategory::Spacing, "unit").unwrap(),
            &TokenValue::Number(4.0)
        );
    }

    #[test]
    fn test_route_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("routes.toml");
        fs::write(
            &path,
            r#"
            [[routes]]
            path = "/crm"
            title = "CRM"

            [[routes]]
            path = "/finance"
            module = { name = "finance", entry = "modules/finance/index.js" }
            "#,
        )
        .unwrap();

        let resolver = load_routes(&path).unwrap();
        assert_eq!(resolver.len(), 2);
        assert!(resolver.resolve("/crm").is_placeholder());
        assert!(!resolver.resolve("/finance").is_placeholder());
    }

    #[test]
    fn test_missing_route_document() {
        let err = load_routes(Path::new("/nonexistent/routes.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read route document"));
    }
}

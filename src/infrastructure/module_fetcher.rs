use crate::domain::catalog::ComponentName;
use crate::domain::ports::{LoadedModule, ModuleFetcher};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads lazy component bundles from `<dist>/lazy/<kebab-name>.js`
#[derive(Debug, Clone)]
pub struct FsModuleFetcher {
    root: PathBuf,
}

impl FsModuleFetcher {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            root: dist_dir.into().join("lazy"),
        }
    }

    pub fn resource_path(&self, name: &ComponentName) -> PathBuf {
        self.root.join(format!("{}.js", name.to_kebab()))
    }
}

#[async_trait]
impl ModuleFetcher for FsModuleFetcher {
    async fn fetch(&self, name: &ComponentName) -> Result<LoadedModule> {
        let path = self.resource_path(name);
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(LoadedModule {
            component: name.to_string(),
            resource: path.display().to_string(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_reads_kebab_bundle() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("lazy")).unwrap();
        std::fs::write(dir.path().join("lazy/pdf-viewer.js"), "export default 1").unwrap();

        let fetcher = FsModuleFetcher::new(dir.path());
        let module = fetcher.fetch(&ComponentName::new("PdfViewer")).await.unwrap();

        assert_eq!(module.bytes, b"export default 1");
        assert!(module.resource.ends_with("pdf-viewer.js"));
    }

    #[tokio::test]
    async fn test_acronym_name_maps_to_single_word_bundle() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("lazy")).unwrap();
        std::fs::write(dir.path().join("lazy/pdf-viewer.js"), "export default 2").unwrap();

        let fetcher = FsModuleFetcher::new(dir.path());
        let name = ComponentName::new("PDFViewer");
        assert!(fetcher.resource_path(&name).ends_with("lazy/pdf-viewer.js"));

        let module = fetcher.fetch(&name).await.unwrap();
        assert_eq!(module.bytes, b"export default 2");
    }

    #[tokio::test]
    async fn test_missing_bundle_fails() {
        let dir = TempDir::new().unwrap();
        let fetcher = FsModuleFetcher::new(dir.path());
        let err = fetcher.fetch(&ComponentName::new("CodeEditor")).await.unwrap_err();
        assert!(err.to_string().contains("code-editor.js"));
    }
}

//! Component sources backed by the filesystem: a TOML manifest and a scan of
//! a component source directory.

use crate::domain::catalog::{
    ComponentDescriptor, ComponentKind, ComponentName, ComponentStatus, PropsContract, make_stub,
};
use crate::domain::errors::DiscoveryError;
use crate::domain::ports::ComponentSource;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One `[[components]]` entry of a manifest.
///
/// ```toml
/// [[components]]
/// name = "PdfViewer"
/// status = "LazyHeavy"
/// kind = "advanced"
/// props = ["src", "children?", "className?"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    pub name: String,
    #[serde(default = "default_status")]
    pub status: ComponentStatus,
    #[serde(default)]
    pub kind: ComponentKind,
    /// `name` for required props, `name?` for optional ones. Stubs get the
    /// standard contract when empty.
    #[serde(default)]
    pub props: Vec<String>,
}

fn default_status() -> ComponentStatus {
    ComponentStatus::Stub
}

impl ManifestEntry {
    fn into_descriptor(self) -> ComponentDescriptor {
        let props = if self.props.is_empty() && self.status == ComponentStatus::Stub {
            PropsContract::standard()
        } else {
            PropsContract::from_specs(self.props.iter().map(String::as_str))
        };
        ComponentDescriptor::new(self.name, self.status, self.kind, props)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub components: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn parse(source_name: &str, text: &str) -> Result<Self, DiscoveryError> {
        toml::from_str(text).map_err(|e| DiscoveryError::Source {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Component table read from a TOML manifest file
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
    label: String,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = format!("manifest:{}", path.display());
        Self { path, label }
    }
}

impl ComponentSource for ManifestSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn discover(&self) -> Result<Vec<ComponentDescriptor>, DiscoveryError> {
        let text = fs::read_to_string(&self.path).map_err(|e| DiscoveryError::Source {
            source_name: self.label.clone(),
            reason: e.to_string(),
        })?;
        let manifest = Manifest::parse(&self.label, &text)?;
        Ok(manifest
            .components
            .into_iter()
            .map(ManifestEntry::into_descriptor)
            .collect())
    }
}

/// Stub descriptors for every component file or directory under a source
/// directory. `alert-dialog.tsx` and `alert-dialog/` both become
/// `AlertDialog`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    label: String,
    kind: ComponentKind,
}

const IGNORED_MARKERS: [&str; 4] = [".test.", ".spec.", ".stories.", ".edge."];

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let label = format!("dir:{}", root.display());
        Self {
            root,
            label,
            kind: ComponentKind::Core,
        }
    }

    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }

    fn component_stem(path: &Path, is_dir: bool) -> Option<String> {
        let file_name = path.file_name()?.to_str()?;
        if file_name.starts_with('.') || file_name.starts_with('_') {
            return None;
        }
        if is_dir {
            return Some(file_name.to_string());
        }
        if IGNORED_MARKERS.iter().any(|m| file_name.contains(m)) {
            return None;
        }
        let stem = file_name.strip_suffix(".tsx")?;
        (stem != "index").then(|| stem.to_string())
    }
}

impl ComponentSource for DirectorySource {
    fn name(&self) -> &str {
        &self.label
    }

    fn discover(&self) -> Result<Vec<ComponentDescriptor>, DiscoveryError> {
        let to_error = |e: std::io::Error| DiscoveryError::Source {
            source_name: self.label.clone(),
            reason: e.to_string(),
        };

        let mut stems = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(to_error)? {
            let entry = entry.map_err(to_error)?;
            let is_dir = entry.file_type().map_err(to_error)?.is_dir();
            if let Some(stem) = Self::component_stem(&entry.path(), is_dir) {
                stems.push(stem);
            }
        }

        // read_dir order is platform dependent
        stems.sort();
        debug!("Registry: {} component file(s) under {}", stems.len(), self.root.display());

        Ok(stems
            .iter()
            .map(|stem| make_stub(ComponentName::from_kebab(stem)).with_kind(self.kind))
            .collect())
    }
}

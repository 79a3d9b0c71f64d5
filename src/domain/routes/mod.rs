//! Dashboard route declarations and the placeholder module resolver.
//!
//! Every declared route resolves to a render target. Routes whose module has
//! not landed yet render a uniform placeholder that keeps the route's title
//! and description, so navigation stays stable while implementations arrive.

pub mod dashboard;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_TITLE: &str = "Module";
pub const DEFAULT_DESCRIPTION: &str = "Under development";

/// Normalized route path: leading `/`, no trailing `/`, lower-case
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RouteId(String);

impl RouteId {
    pub fn new(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/').to_lowercase();
        RouteId(format!("/{}", trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteId {
    fn from(path: &str) -> Self {
        RouteId::new(path)
    }
}

impl From<String> for RouteId {
    fn from(path: String) -> Self {
        RouteId::new(&path)
    }
}

impl From<RouteId> for String {
    fn from(id: RouteId) -> Self {
        id.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderSpec {
    pub title: String,
    pub description: String,
}

impl PlaceholderSpec {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Fill whichever half was not declared with the documented default
    pub fn from_parts(title: Option<String>, description: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

impl Default for PlaceholderSpec {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_DESCRIPTION)
    }
}

/// Reference to a real, implemented dashboard module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    pub name: String,
    pub entry: String,
}

impl ModuleRef {
    pub fn new(name: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry: entry.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderTarget {
    Module(ModuleRef),
    Placeholder(PlaceholderSpec),
}

impl RenderTarget {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, RenderTarget::Placeholder(_))
    }
}

/// One entry of a route document.
///
/// ```toml
/// [[routes]]
/// path = "/crm"
/// title = "CRM"
/// description = "Companies, contacts and pipeline"
///
/// [[routes]]
/// path = "/finance"
/// module = { name = "finance", entry = "modules/finance/index.js" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDeclaration {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteDocument {
    #[serde(default)]
    pub routes: Vec<RouteDeclaration>,
}

#[derive(Debug, Clone)]
struct DeclaredRoute {
    id: RouteId,
    placeholder: PlaceholderSpec,
}

/// Navigation entry with the target it currently resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub path: RouteId,
    pub title: String,
    pub target: RenderTarget,
}

/// Maps route ids to real modules or placeholders. Resolution never fails.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderResolver {
    declared: Vec<DeclaredRoute>,
    index: HashMap<RouteId, usize>,
    modules: HashMap<RouteId, ModuleRef>,
}

impl PlaceholderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_declarations(declarations: impl IntoIterator<Item = RouteDeclaration>) -> Self {
        declarations
            .into_iter()
            .fold(Self::new(), |resolver, declaration| resolver.declare(declaration))
    }

    /// Add a route. Re-declaring a path replaces its placeholder in place and
    /// keeps its navigation position.
    pub fn declare(mut self, declaration: RouteDeclaration) -> Self {
        let id = RouteId::new(&declaration.path);
        let placeholder = PlaceholderSpec::from_parts(declaration.title, declaration.description);

        match self.index.get(&id) {
            Some(&i) => self.declared[i].placeholder = placeholder,
            None => {
                self.index.insert(id.clone(), self.declared.len());
                self.declared.push(DeclaredRoute {
                    id: id.clone(),
                    placeholder,
                });
            }
        }

        if let Some(module) = declaration.module {
            self.modules.insert(id, module);
        }
        self
    }

    /// Attach a real module once its implementation lands.
    pub fn register_module(mut self, route: &str, module: ModuleRef) -> Self {
        self.modules.insert(RouteId::new(route), module);
        self
    }

    /// Registered module unchanged, else the declared placeholder, else the
    /// default placeholder.
    pub fn resolve(&self, route: &str) -> RenderTarget {
        let id = RouteId::new(route);

        if let Some(module) = self.modules.get(&id) {
            return RenderTarget::Module(module.clone());
        }

        match self.index.get(&id) {
            Some(&i) => RenderTarget::Placeholder(self.declared[i].placeholder.clone()),
            None => {
                tracing::debug!(
                    "PlaceholderResolver: {} undeclared, using default placeholder",
                    id
                );
                RenderTarget::Placeholder(PlaceholderSpec::default())
            }
        }
    }

    /// Declared routes in declaration order
    pub fn navigation(&self) -> Vec<NavigationEntry> {
        self.declared
            .iter()
            .map(|route| NavigationEntry {
                path: route.id.clone(),
                title: route.placeholder.title.clone(),
                target: self.resolve(route.id.as_str()),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.declared
            .iter()
            .filter(|route| !self.modules.contains_key(&route.id))
            .count()
    }
}

use crate::domain::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Component name as displayed, compared case-insensitively
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ComponentName {
    display: String,
    key: String,
}

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Self {
        let display = name.into();
        let key = Self::normalize(&display);
        Self { display, key }
    }

    /// Build from a kebab-case source name (`alert-dialog` -> `AlertDialog`)
    pub fn from_kebab(name: &str) -> Self {
        let display: String = name
            .split(['-', '_'])
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect();
        Self::new(display)
    }

    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Lower-cased lookup key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// `PdfViewer` -> `pdf-viewer`, `PDFViewer` -> `pdf-viewer`.
    ///
    /// An acronym stays one word; a hyphen goes before an upper-case letter
    /// only at a lower-to-upper boundary or where an acronym ends.
    pub fn to_kebab(&self) -> String {
        let chars: Vec<char> = self.display.chars().collect();
        let mut out = String::with_capacity(self.display.len() + 4);
        for (i, &c) in chars.iter().enumerate() {
            if c.is_uppercase() && i > 0 {
                let prev_lower = chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit();
                let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev_lower || (next_lower && chars[i - 1].is_uppercase()) {
                    out.push('-');
                }
            }
            out.extend(c.to_lowercase());
        }
        out
    }
}

impl PartialEq for ComponentName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Hash for ComponentName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<String> for ComponentName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ComponentName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<ComponentName> for String {
    fn from(name: ComponentName) -> Self {
        name.display
    }
}

/// Implementation status of a catalog entry.
///
/// Stub -> Implemented is the only transition. LazyHeavy is an initial-only
/// classification; Implemented and LazyHeavy are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentStatus {
    Stub,
    Implemented,
    LazyHeavy,
}

impl ComponentStatus {
    pub fn can_transition_to(self, next: ComponentStatus) -> bool {
        matches!(
            (self, next),
            (ComponentStatus::Stub, ComponentStatus::Implemented)
        )
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, ComponentStatus::Stub)
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComponentStatus::Stub => "Stub",
            ComponentStatus::Implemented => "Implemented",
            ComponentStatus::LazyHeavy => "LazyHeavy",
        };
        f.write_str(s)
    }
}

/// Catalog grouping of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    #[default]
    Core,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropSpec {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

impl PropSpec {
    /// Parse the compact `name` / `name?` notation used by catalog tables
    pub fn parse(spec: &str) -> Self {
        match spec.strip_suffix('?') {
            Some(name) => Self {
                name: name.to_string(),
                required: false,
            },
            None => Self {
                name: spec.to_string(),
                required: true,
            },
        }
    }
}

/// Ordered set of declared props. Re-declaring a name keeps the first entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PropSpec>", into = "Vec<PropSpec>")]
pub struct PropsContract {
    props: Vec<PropSpec>,
}

impl PropsContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// `children?` and `className?`, the surface every catalog entry exposes
    pub fn standard() -> Self {
        Self::new().optional("children").optional("className")
    }

    pub fn from_specs<'a>(specs: impl IntoIterator<Item = &'a str>) -> Self {
        specs.into_iter().map(PropSpec::parse).collect::<Vec<_>>().into()
    }

    pub fn required(self, name: &str) -> Self {
        self.with(PropSpec {
            name: name.to_string(),
            required: true,
        })
    }

    pub fn optional(self, name: &str) -> Self {
        self.with(PropSpec {
            name: name.to_string(),
            required: false,
        })
    }

    fn with(mut self, prop: PropSpec) -> Self {
        if !self.contains(&prop.name) {
            self.props.push(prop);
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.props.iter().any(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropSpec> {
        self.props.iter()
    }

    pub fn required_props(&self) -> impl Iterator<Item = &str> {
        self.props
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl From<Vec<PropSpec>> for PropsContract {
    fn from(specs: Vec<PropSpec>) -> Self {
        specs.into_iter().fold(Self::new(), Self::with)
    }
}

impl From<PropsContract> for Vec<PropSpec> {
    fn from(contract: PropsContract) -> Self {
        contract.props
    }
}

/// Registry record for one component name.
///
/// Fields are private and there are no setters: a status change produces a
/// new descriptor through [`ComponentDescriptor::promote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDescriptor {
    name: ComponentName,
    status: ComponentStatus,
    kind: ComponentKind,
    props: PropsContract,
    fallback_text: String,
}

impl ComponentDescriptor {
    pub fn new(
        name: impl Into<ComponentName>,
        status: ComponentStatus,
        kind: ComponentKind,
        props: PropsContract,
    ) -> Self {
        let name = name.into();
        let fallback_text = super::stub::fallback_text(&name);
        Self {
            name,
            status,
            kind,
            props,
            fallback_text,
        }
    }

    pub fn implemented(name: impl Into<ComponentName>, props: PropsContract) -> Self {
        Self::new(name, ComponentStatus::Implemented, ComponentKind::Core, props)
    }

    pub fn lazy_heavy(name: impl Into<ComponentName>, props: PropsContract) -> Self {
        Self::new(name, ComponentStatus::LazyHeavy, ComponentKind::Advanced, props)
    }

    pub fn with_kind(mut self, kind: ComponentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Replace a Stub with an Implemented descriptor carrying `props`.
    pub fn promote(&self, props: PropsContract) -> Result<ComponentDescriptor, RegistryError> {
        let next = ComponentStatus::Implemented;
        if !self.status.can_transition_to(next) {
            return Err(RegistryError::IllegalTransition {
                name: self.name.to_string(),
                from: self.status,
                to: next,
            });
        }
        if props.is_empty() {
            return Err(RegistryError::InvalidStatus {
                name: self.name.to_string(),
                status: next,
            });
        }

        Ok(Self::new(self.name.clone(), next, self.kind, props))
    }

    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    pub fn status(&self) -> ComponentStatus {
        self.status
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn props(&self) -> &PropsContract {
        &self.props
    }

    pub fn fallback_text(&self) -> &str {
        &self.fallback_text
    }
}

use super::descriptor::{
    ComponentDescriptor, ComponentKind, ComponentName, ComponentStatus, PropsContract,
};
use serde::Serialize;

pub fn fallback_text(name: &ComponentName) -> String {
    format!("{} Component (Stub)", name)
}

/// Generate the uniform placeholder implementation for `name`.
pub fn make_stub(name: impl Into<ComponentName>) -> ComponentDescriptor {
    ComponentDescriptor::new(
        name,
        ComponentStatus::Stub,
        ComponentKind::Core,
        PropsContract::standard(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum RenderBody {
    Children(String),
    /// Stub rendered without children
    Fallback(String),
    Empty,
}

/// Presentation-layer output for one catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub component: String,
    pub status: ComponentStatus,
    pub class_name: Option<String>,
    pub body: RenderBody,
}

impl Rendered {
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            RenderBody::Children(text) | RenderBody::Fallback(text) => Some(text),
            RenderBody::Empty => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.body, RenderBody::Fallback(_))
    }
}

/// Render a descriptor. Supplied children always win; fallback text is
/// only produced for Stub entries.
pub fn render(
    descriptor: &ComponentDescriptor,
    children: Option<&str>,
    class_name: Option<&str>,
) -> Rendered {
    let body = match (children, descriptor.status()) {
        (Some(children), _) if !children.is_empty() => RenderBody::Children(children.to_string()),
        (_, ComponentStatus::Stub) => RenderBody::Fallback(descriptor.fallback_text().to_string()),
        _ => RenderBody::Empty,
    };

    Rendered {
        component: descriptor.name().to_string(),
        status: descriptor.status(),
        class_name: class_name.map(str::to_string),
        body,
    }
}

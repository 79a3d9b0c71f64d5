//! Per-package theme configuration built from the token store.
//!
//! Each consuming package maps the token categories onto its theme extension
//! fields and may add aliases. Aliases reference tokens by key, never by
//! literal value, so a token change reaches every package on the next build.

use crate::domain::errors::TokenError;
use crate::domain::tokens::{TokenCategory, TokenRef, TokenStore, TokenValue};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeBinding {
    pub package: String,
    /// (alias key, token reference); the alias lands in the field of the
    /// referenced token's category
    pub aliases: Vec<(String, TokenRef)>,
}

impl ThemeBinding {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            aliases: Vec::new(),
        }
    }

    pub fn alias(mut self, key: impl Into<String>, reference: TokenRef) -> Self {
        self.aliases.push((key.into(), reference));
        self
    }

    /// Bindings of the workspace packages
    pub fn for_package(package: &str) -> Option<Self> {
        let reference = |category, key: &str| TokenRef {
            category,
            key: key.to_string(),
        };

        match package {
            "ui" => Some(Self::new("ui")),
            "showcase" => Some(
                Self::new("showcase")
                    .alias("brand", reference(TokenCategory::Color, "primary"))
                    .alias("surface", reference(TokenCategory::Color, "card")),
            ),
            "dashboard" => Some(
                Self::new("dashboard")
                    .alias("sidebar", reference(TokenCategory::Color, "card"))
                    .alias(
                        "sidebar-foreground",
                        reference(TokenCategory::Color, "card-foreground"),
                    )
                    .alias("panel", reference(TokenCategory::Radius, "lg"))
                    .alias("panel", reference(TokenCategory::Shadow, "md")),
            ),
            _ => None,
        }
    }

    pub const PACKAGES: [&'static str; 3] = ["ui", "showcase", "dashboard"];
}

/// Theme extension fields of one package
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageTheme {
    pub package: String,
    pub token_version: u32,
    pub colors: BTreeMap<String, TokenValue>,
    pub border_radius: BTreeMap<String, TokenValue>,
    pub spacing: BTreeMap<String, TokenValue>,
    pub box_shadow: BTreeMap<String, TokenValue>,
    pub font_family: BTreeMap<String, TokenValue>,
}

impl PackageTheme {
    pub fn build(store: &TokenStore, binding: &ThemeBinding) -> Result<Self, TokenError> {
        let mut theme = Self {
            package: binding.package.clone(),
            token_version: store.version(),
            colors: BTreeMap::new(),
            border_radius: BTreeMap::new(),
            spacing: BTreeMap::new(),
            box_shadow: BTreeMap::new(),
            font_family: BTreeMap::new(),
        };

        for category in store.categories() {
            let field = theme.field_mut(category);
            for (key, value) in store.entries(category) {
                field.insert(key.to_string(), value.clone());
            }
        }

        for (alias, reference) in &binding.aliases {
            let value = store.resolve_ref(reference)?.clone();
            theme.field_mut(reference.category).insert(alias.clone(), value);
        }

        Ok(theme)
    }

    fn field_mut(&mut self, category: TokenCategory) -> &mut BTreeMap<String, TokenValue> {
        match category {
            TokenCategory::Color => &mut self.colors,
            TokenCategory::Radius => &mut self.border_radius,
            TokenCategory::Spacing => &mut self.spacing,
            TokenCategory::Shadow => &mut self.box_shadow,
            TokenCategory::Font => &mut self.font_family,
        }
    }

    pub fn field(&self, category: TokenCategory) -> &BTreeMap<String, TokenValue> {
        match category {
            TokenCategory::Color => &self.colors,
            TokenCategory::Radius => &self.border_radius,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::Shadow => &self.box_shadow,
            TokenCategory::Font => &self.font_family,
        }
    }

    /// CSS custom properties block, e.g. `--color-primary: #2563eb;`
    pub fn to_css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for category in TokenCategory::ALL {
            for (key, value) in self.field(category) {
                let _ = writeln!(css, "  --{}-{}: {};", category, key, value);
            }
        }
        css.push_str("}\n");
        css
    }
}

use super::{TokenCategory, TokenStore, TokenValue};
use crate::domain::errors::TokenError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serialized form of a token store, one table per category.
///
/// ```toml
/// version = 3
///
/// [color]
/// primary = "#2563eb"
///
/// [font]
/// sans = ["Inter", "system-ui", "sans-serif"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenDocument {
    pub version: u32,
    #[serde(default)]
    pub color: BTreeMap<String, TokenValue>,
    #[serde(default)]
    pub radius: BTreeMap<String, TokenValue>,
    #[serde(default)]
    pub spacing: BTreeMap<String, TokenValue>,
    #[serde(default)]
    pub shadow: BTreeMap<String, TokenValue>,
    #[serde(default)]
    pub font: BTreeMap<String, TokenValue>,
}

impl TokenDocument {
    fn table(&self, category: TokenCategory) -> &BTreeMap<String, TokenValue> {
        match category {
            TokenCategory::Color => &self.color,
            TokenCategory::Radius => &self.radius,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::Shadow => &self.shadow,
            TokenCategory::Font => &self.font,
        }
    }

    pub fn into_store(self) -> Result<TokenStore, TokenError> {
        let mut builder = TokenStore::builder(self.version);
        for category in TokenCategory::ALL {
            for (key, value) in self.table(category) {
                builder.insert(category, key.clone(), value.clone())?;
            }
        }
        Ok(builder.build())
    }

    pub fn from_store(store: &TokenStore) -> Self {
        let collect = |category| {
            store
                .entries(category)
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect()
        };

        Self {
            version: store.version(),
            color: collect(TokenCategory::Color),
            radius: collect(TokenCategory::Radius),
            spacing: collect(TokenCategory::Spacing),
            shadow: collect(TokenCategory::Shadow),
            font: collect(TokenCategory::Font),
        }
    }
}

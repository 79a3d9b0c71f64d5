//! Design token store.
//!
//! Tokens are the single source of truth for visual values shared by every
//! package that builds styling configuration. The store is populated once,
//! either from the built-in defaults or from a token document, and is
//! read-only afterwards.

pub mod defaults;
mod document;

pub use document::TokenDocument;

use crate::domain::errors::TokenError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The five fixed token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Radius,
    Spacing,
    Shadow,
    Font,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Color,
        TokenCategory::Radius,
        TokenCategory::Spacing,
        TokenCategory::Shadow,
        TokenCategory::Font,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Radius => "radius",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Font => "font",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color" => Ok(TokenCategory::Color),
            "radius" => Ok(TokenCategory::Radius),
            "spacing" => Ok(TokenCategory::Spacing),
            "shadow" => Ok(TokenCategory::Shadow),
            "font" => Ok(TokenCategory::Font),
            _ => Err(TokenError::UnknownCategory {
                category: s.to_string(),
            }),
        }
    }
}

/// An opaque token value. The store never converts units or color spaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Text(s) => f.write_str(s),
            TokenValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Text(s.to_string())
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Number(n)
    }
}

impl From<Vec<&str>> for TokenValue {
    fn from(items: Vec<&str>) -> Self {
        TokenValue::List(items.into_iter().map(str::to_string).collect())
    }
}

/// A `<category>.<key>` reference to a token, used by consuming
/// configurations instead of literal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenRef {
    pub category: TokenCategory,
    pub key: String,
}

impl FromStr for TokenRef {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, key) = s
            .split_once('.')
            .filter(|(c, k)| !c.is_empty() && !k.is_empty())
            .ok_or_else(|| TokenError::MalformedReference {
                reference: s.to_string(),
            })?;

        Ok(TokenRef {
            category: category.parse()?,
            key: key.to_string(),
        })
    }
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.key)
    }
}

/// Restartable iterator over the category names
pub type Categories = std::iter::Copied<std::slice::Iter<'static, TokenCategory>>;

/// Immutable, versioned token mapping
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStore {
    version: u32,
    tokens: BTreeMap<TokenCategory, BTreeMap<String, TokenValue>>,
}

impl TokenStore {
    pub fn builder(version: u32) -> TokenStoreBuilder {
        TokenStoreBuilder {
            version,
            tokens: BTreeMap::new(),
        }
    }

    /// Resolve a token by category and key.
    ///
    /// Fails with [`TokenError::UnknownToken`] when the key is absent; never
    /// falls back to a default value.
    pub fn resolve(&self, category: TokenCategory, key: &str) -> Result<&TokenValue, TokenError> {
        self.tokens
            .get(&category)
            .and_then(|entries| entries.get(key))
            .ok_or_else(|| TokenError::UnknownToken {
                category,
                key: key.to_string(),
            })
    }

    /// Resolve with the category given by name, as read from configuration.
    pub fn resolve_named(&self, category: &str, key: &str) -> Result<&TokenValue, TokenError> {
        self.resolve(category.parse()?, key)
    }

    pub fn resolve_ref(&self, reference: &TokenRef) -> Result<&TokenValue, TokenError> {
        self.resolve(reference.category, &reference.key)
    }

    /// The five category names. Cloning the iterator restarts it.
    pub fn categories(&self) -> Categories {
        TokenCategory::ALL.iter().copied()
    }

    /// Tokens of one category, ordered by key
    pub fn entries(&self, category: TokenCategory) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tokens
            .get(&category)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn count(&self, category: TokenCategory) -> usize {
        self.tokens.get(&category).map_or(0, BTreeMap::len)
    }

    pub fn len(&self) -> usize {
        self.tokens.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}

/// One-shot builder; the store it produces has no mutators.
#[derive(Debug)]
pub struct TokenStoreBuilder {
    version: u32,
    tokens: BTreeMap<TokenCategory, BTreeMap<String, TokenValue>>,
}

impl TokenStoreBuilder {
    pub fn insert(
        &mut self,
        category: TokenCategory,
        key: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Result<&mut Self, TokenError> {
        let key = key.into();
        let entries = self.tokens.entry(category).or_default();
        if entries.contains_key(&key) {
            return Err(TokenError::DuplicateKey { category, key });
        }
        entries.insert(key, value.into());
        Ok(self)
    }

    pub fn build(self) -> TokenStore {
        TokenStore {
            version: self.version,
            tokens: self.tokens,
        }
    }
}

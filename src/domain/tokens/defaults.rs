use super::{TokenCategory, TokenStore, TokenValue};

pub const DEFAULT_VERSION: u32 = 1;

const COLORS: &[(&str, &str)] = &[
    ("primary", "#2563eb"),
    ("secondary", "#8b5cf6"),
    ("accent", "#10b981"),
    ("neutral", "#6b7280"),
    ("success", "#10b981"),
    ("warning", "#f59e0b"),
    ("error", "#ef4444"),
    ("info", "#3b82f6"),
    ("background", "#ffffff"),
    ("foreground", "#111827"),
    ("card", "#ffffff"),
    ("card-foreground", "#111827"),
    ("muted", "#f3f4f6"),
    ("muted-foreground", "#6b7280"),
    ("border", "#e5e7eb"),
    ("input", "#e5e7eb"),
    ("ring", "#3b82f6"),
];

const RADII: &[(&str, &str)] = &[
    ("none", "0"),
    ("sm", "0.125rem"),
    ("base", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("full", "9999px"),
];

const SPACING: &[(&str, &str)] = &[
    ("xs", "0.25rem"),
    ("sm", "0.5rem"),
    ("md", "1rem"),
    ("lg", "1.5rem"),
    ("xl", "2rem"),
    ("2xl", "3rem"),
];

const SHADOWS: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    ("base", "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
    ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
    ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
];

const FONTS: &[(&str, &[&str])] = &[
    ("sans", &["Inter", "system-ui", "sans-serif"]),
    ("mono", &["JetBrains Mono", "ui-monospace", "monospace"]),
];

/// Built-in token set used when no token document is configured
pub fn default_store() -> TokenStore {
    let mut tokens = Vec::new();
    for (category, table) in [
        (TokenCategory::Color, COLORS),
        (TokenCategory::Radius, RADII),
        (TokenCategory::Spacing, SPACING),
        (TokenCategory::Shadow, SHADOWS),
    ] {
        tokens.extend(
            table
                .iter()
                .map(|(k, v)| (category, *k, TokenValue::from(*v))),
        );
    }
    tokens.extend(
        FONTS
            .iter()
            .map(|(k, stack)| (TokenCategory::Font, *k, TokenValue::from(stack.to_vec()))),
    );

    let mut builder = TokenStore::builder(DEFAULT_VERSION);
    for (category, key, value) in tokens {
        // Keys in the tables above are unique per category.
        if let Err(e) = builder.insert(category, key, value) {
            tracing::error!("TokenStore: built-in defaults rejected: {}", e);
        }
    }
    builder.build()
}

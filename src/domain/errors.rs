use crate::domain::catalog::ComponentStatus;
use crate::domain::tokens::TokenCategory;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while populating or reading the token store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Unknown token category: {category} (expected color, radius, spacing, shadow or font)")]
    UnknownCategory { category: String },

    #[error("Unknown token: {category}.{key}")]
    UnknownToken { category: TokenCategory, key: String },

    #[error("Duplicate token key in {category}: {key}")]
    DuplicateKey { category: TokenCategory, key: String },

    #[error("Malformed token reference '{reference}': expected <category>.<key>")]
    MalformedReference { reference: String },
}

/// Integrity failures while building a component registry.
///
/// All of these are fatal to the build pass that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid component name: {name:?} is blank")]
    InvalidName { name: String },

    #[error("Duplicate component name: {name} (conflicts with {existing})")]
    DuplicateName { name: String, existing: String },

    #[error("Invalid status for {name}: {status} components must declare at least one prop")]
    InvalidStatus {
        name: String,
        status: ComponentStatus,
    },

    #[error("Registry is empty: discovery produced no components")]
    EmptyRegistry,

    #[error("Illegal status transition for {name}: {from} -> {to}")]
    IllegalTransition {
        name: String,
        from: ComponentStatus,
        to: ComponentStatus,
    },

    #[error("Component not registered: {name}")]
    NotFound { name: String },
}

/// Errors raised by a discovery pass over component sources
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Component source '{source_name}' failed: {reason}")]
    Source { source_name: String, reason: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised while resolving a lazily loaded component
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Lazy load refused: {name} is not registered")]
    NotRegistered { name: String },

    #[error("Lazy load refused: {name} is {status}, not LazyHeavy")]
    NotLazy {
        name: String,
        status: ComponentStatus,
    },

    #[error("Lazy load of {name} failed after {attempts} attempt(s): {reason}")]
    Fetch {
        name: String,
        attempts: u32,
        reason: String,
    },
}

/// Startup and serving failures of the showcase server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("SPA entry document not found: {path}")]
    MissingEntryDocument { path: PathBuf },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

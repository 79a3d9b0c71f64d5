//! Push-based observability for the catalog
//!
//! Metrics are only ever pushed out as structured JSON logs. The showcase
//! HTTP surface does not expose them.

pub mod metrics;
pub mod reporter;

pub use metrics::Metrics;
pub use reporter::{CatalogSnapshot, MetricsReporter};

//! Observability infrastructure for the storefront frontend.
//!
//! - `StructuredLogger` - Request-scoped structured logging
//! - `MetricsCollector` - Time-to-shell and per-slot timing metrics

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

//! Core abstractions for the Vitrine storefront frontend.
//!
//! This crate holds the request-scoped building blocks shared by the
//! platform crates and the page workloads:
//! - `RequestContext` - Typed per-request state
//! - `LocaleContext` - Negotiated language/country pair and path matching
//! - `StorefrontConfig` - Store-level configuration
//! - `TimingContext` - Lifecycle timing marks
//! - `PageError` - Error taxonomy for page rendering

mod config;
mod context;
mod error;
mod lifecycle;
mod locale;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use locale::*;

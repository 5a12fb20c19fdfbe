//! Query catalog for the commerce Storefront API.
//!
//! Every query the frontend issues lives here as a named template:
//! - `Fragment` - Reusable query fragments with declared dependencies
//! - `QueryTemplate` - Named operations composed from fragments
//! - `QueryVariables` - Flat scalar variable maps
//!
//! Composition is textual: fragments are interpolated ahead of the
//! operation body in a fixed order, so the composed text is byte-stable
//! across calls. The backend schema contract depends on that stability.

mod fragments;
mod templates;
mod variables;

pub use fragments::*;
pub use templates::*;
pub use variables::*;

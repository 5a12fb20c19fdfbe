//! Data access layer for the commerce Storefront API.
//!
//! The API boundary is `query(template, variables) -> JSON`: a template from
//! the catalog plus a flat variable map, POSTed as GraphQL over HTTP.
//! Localization variables are injected into every query unless the caller
//! overrode them. Response shapes decode absent lists as empty, never as
//! errors.
//!
//! The HTTP transport is only available on the `wasm32` target; native
//! builds keep the request/decode pipeline (used by tests) and reject sends.

mod client;
mod error;
pub mod shapes;

pub use client::*;
pub use error::*;
pub use shapes::*;

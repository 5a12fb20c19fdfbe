//! Content shapes decoded from Storefront API responses.
//!
//! All shapes are read-only value objects scoped to a single request.
//! Optional lists decode as empty via `#[serde(default)]`; a malformed or
//! missing connection is an empty state, not an error.

mod collection;
mod hero;
mod image;
mod money;
mod product;
mod shop;

pub use collection::*;
pub use hero::*;
pub use image::*;
pub use money::*;
pub use product::*;
pub use shop::*;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decode a query's `data` member into a typed shape.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
}

//! Presentational renderers for the homepage slots.
//!
//! Each renderer is a pure mapping from a content shape to markup. Absent
//! or empty input renders the empty string - never a spinner, never an
//! error.

mod featured_collections;
mod hero;
mod product_card;
mod product_swimlane;

pub use featured_collections::*;
pub use hero::*;
pub use product_card::*;
pub use product_swimlane::*;

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

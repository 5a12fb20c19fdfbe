//! Public SDK for the Vitrine storefront frontend.
//!
//! This crate re-exports the platform crates a page workload needs:
//!
//! ```ignore
//! use vitrine_sdk::prelude::*;
//!
//! async fn handle(ctx: RequestContext, sink: &mut StreamingSink<impl Sink<Vec<u8>>>) {
//!     let logger = StructuredLogger::new(ctx.request_id.clone());
//!     logger.info("Handling request");
//!
//!     sink.send_shell(&shell.render_opening()).await?;
//!
//!     let mut slots = SlotSet::new();
//!     slots.push_deferred(DeferredSlot::new("featured-products", async move {
//!         let data = api.query(&HOMEPAGE_FEATURED_PRODUCTS_QUERY, vars).await?;
//!         Ok(render(&data))
//!     }));
//!     compose(sink, slots, &SlotFailurePolicy::Omit).await?;
//! }
//! ```

pub use vitrine_composer;
pub use vitrine_core;
pub use vitrine_data;
pub use vitrine_observability;
pub use vitrine_queries;
pub use vitrine_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use vitrine_composer::*;
    pub use vitrine_core::*;
    pub use vitrine_data::*;
    pub use vitrine_observability::*;
    pub use vitrine_queries::*;
    pub use vitrine_streaming::*;
}

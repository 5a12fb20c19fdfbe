//! Deferred render composition.
//!
//! The loader returns an envelope mixing resolved markup with pending
//! slots (named futures). This crate drives the pending slots concurrently
//! and streams each one into the document as it settles:
//! - `DeferredSlot` - A named pending future producing slot markup
//! - `SlotSet` - Resolved + deferred slots for one response
//! - `compose` - Stream resolved slots in order, then deferred slots in
//!   settle order, each inside its own boundary
//! - `SlotFailurePolicy` - What a rejected slot's boundary shows
//!
//! Slots are independent: one slot's rejection or delay never blocks a
//! sibling.

mod compose;
mod deferred;
mod fallback;
mod slots;

pub use compose::*;
pub use deferred::*;
pub use fallback::*;
pub use slots::*;

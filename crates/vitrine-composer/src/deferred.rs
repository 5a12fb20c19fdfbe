//! Named pending slots.

use std::fmt;
use std::future::Future;

use futures::future::{FutureExt, LocalBoxFuture};

/// Outcome of a deferred slot: rendered markup, or the error that rejected
/// it. Empty markup is a valid outcome meaning "render nothing".
pub type SlotResult = Result<String, anyhow::Error>;

/// A named slot whose markup is still pending.
///
/// The future is lazy: constructing a `DeferredSlot` performs no work.
/// Nothing resolves until the composer polls it.
pub struct DeferredSlot {
    name: String,
    future: LocalBoxFuture<'static, SlotResult>,
}

impl DeferredSlot {
    /// Wrap a pending computation as a named slot.
    pub fn new(
        name: impl Into<String>,
        future: impl Future<Output = SlotResult> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            future: future.boxed_local(),
        }
    }

    /// The slot's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_parts(self) -> (String, LocalBoxFuture<'static, SlotResult>) {
        (self.name, self.future)
    }
}

impl fmt::Debug for DeferredSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredSlot")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

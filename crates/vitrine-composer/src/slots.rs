//! The slot set for one response.

use crate::deferred::DeferredSlot;

/// A resolved slot: markup already available when the envelope is built.
#[derive(Debug, Clone)]
pub struct ResolvedSlot {
    /// Slot name.
    pub name: String,
    /// Rendered markup; empty means "render nothing".
    pub html: String,
}

/// Resolved and deferred slots for one response, in declared order.
///
/// Built once by the loader, consumed once by `compose`, then discarded.
#[derive(Debug, Default)]
pub struct SlotSet {
    resolved: Vec<ResolvedSlot>,
    deferred: Vec<DeferredSlot>,
}

impl SlotSet {
    /// Create an empty slot set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolved slot.
    pub fn push_resolved(&mut self, name: impl Into<String>, html: impl Into<String>) {
        self.resolved.push(ResolvedSlot {
            name: name.into(),
            html: html.into(),
        });
    }

    /// Append a deferred slot.
    pub fn push_deferred(&mut self, slot: DeferredSlot) {
        self.deferred.push(slot);
    }

    /// Resolved slots in declared order.
    pub fn resolved(&self) -> &[ResolvedSlot] {
        &self.resolved
    }

    /// Names of pending slots in declared order.
    pub fn deferred_names(&self) -> Vec<&str> {
        self.deferred.iter().map(|s| s.name()).collect()
    }

    /// Number of pending slots.
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    pub(crate) fn into_parts(self) -> (Vec<ResolvedSlot>, Vec<DeferredSlot>) {
        (self.resolved, self.deferred)
    }
}

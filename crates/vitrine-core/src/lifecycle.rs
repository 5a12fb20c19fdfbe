//! Request lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Lifecycle phases for a streamed page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Request received, processing started.
    Start,
    /// Shell HTML has been flushed to client.
    ShellSent,
    /// A named slot has been sent.
    SlotSent(String),
    /// Request completed successfully.
    Completion,
    /// An error occurred.
    Error(String),
}

/// Timing context for observability.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Mark slot start.
    pub fn mark_slot_start(&mut self, slot: &str) {
        self.mark(&format!("slot_{}_start", slot));
    }

    /// Mark slot sent.
    pub fn mark_slot_sent(&mut self, slot: &str) {
        self.mark(&format!("slot_{}_sent", slot));
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get time to shell flush.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.marks
            .get("shell_sent")
            .map(|t| t.duration_since(self.start))
    }

    /// Get time to first streamed slot.
    pub fn time_to_first_slot(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(k, _)| k.starts_with("slot_") && k.ends_with("_sent"))
            .map(|(_, t)| t.duration_since(self.start))
            .min()
    }

    /// Get timing for a specific slot.
    pub fn slot_timing(&self, slot: &str) -> Option<SlotTiming> {
        let start = self.marks.get(&format!("slot_{}_start", slot))?;
        let sent = self.marks.get(&format!("slot_{}_sent", slot))?;

        Some(SlotTiming {
            name: slot.to_string(),
            start: start.duration_since(self.start),
            sent: sent.duration_since(self.start),
            duration: sent.duration_since(*start),
        })
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing information for a streamed slot.
#[derive(Debug, Clone)]
pub struct SlotTiming {
    /// Slot name.
    pub name: String,
    /// Time from request start to slot start.
    pub start: Duration,
    /// Time from request start to slot sent.
    pub sent: Duration,
    /// Duration of slot rendering.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_timing_marks() {
        let mut timing = TimingContext::new();
        timing.mark("shell_sent");
        timing.mark_slot_start("hero");
        timing.mark_slot_sent("hero");

        assert!(timing.time_to_shell().is_some());
        assert!(timing.time_to_first_slot().is_some());

        let slot = timing.slot_timing("hero").unwrap();
        assert_eq!(slot.name, "hero");
        assert!(slot.sent >= slot.start);
    }

    #[test]
    fn test_missing_slot_timing() {
        let timing = TimingContext::new();
        assert!(timing.slot_timing("hero").is_none());
        assert!(timing.time_to_shell().is_none());
    }
}

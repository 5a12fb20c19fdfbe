//! Explicit flush control - no implicit buffering.

/// Flush policy for streaming responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlushPolicy {
    /// Flush after the shell and after each slot.
    #[default]
    AfterEachSlot,
    /// Flush only after the shell is sent.
    AfterShell,
    /// Manual flush control only.
    Manual,
}

impl FlushPolicy {
    /// Check if should flush after shell.
    pub fn flush_after_shell(&self) -> bool {
        matches!(self, Self::AfterShell | Self::AfterEachSlot)
    }

    /// Check if should flush after a slot.
    pub fn flush_after_slot(&self) -> bool {
        matches!(self, Self::AfterEachSlot)
    }
}

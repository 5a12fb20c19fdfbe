//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use vitrine_core::{LifecyclePhase, PageError, TimingContext};

use crate::flush::FlushPolicy;

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, slots can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// Generic over the underlying sink type to work with any `Sink<Vec<u8>>`
/// implementation, including the host runtime's outgoing response body.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    flush_policy: FlushPolicy,
    slots_sent: Vec<String>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            flush_policy: FlushPolicy::default(),
            slots_sent: Vec::new(),
        }
    }

    /// Set the flush policy.
    pub fn with_flush_policy(mut self, policy: FlushPolicy) -> Self {
        self.flush_policy = policy;
        self
    }

    /// Send the shell HTML. Must be called before any slots.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), PageError> {
        if self.state != SinkState::Initial {
            return Err(PageError::Stream(
                "shell already sent or sink completed".to_string(),
            ));
        }

        self.timing.mark("shell_start");
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| PageError::Stream(e.to_string()))?;
        if self.flush_policy.flush_after_shell() {
            self.inner
                .flush()
                .await
                .map_err(|e| PageError::Stream(e.to_string()))?;
        }
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named slot's markup. Shell must be sent first.
    ///
    /// Slots are independently streamable; they can be sent in any order
    /// after the shell.
    pub async fn send_slot(&mut self, name: &str, html: &str) -> Result<(), PageError> {
        if self.state == SinkState::Initial {
            return Err(PageError::ShellNotSent);
        }
        if self.state == SinkState::Completed {
            return Err(PageError::Stream("sink already completed".to_string()));
        }

        self.timing.mark_slot_start(name);
        self.inner
            .send(html.as_bytes().to_vec())
            .await
            .map_err(|e| PageError::Stream(e.to_string()))?;
        if self.flush_policy.flush_after_slot() {
            self.inner
                .flush()
                .await
                .map_err(|e| PageError::Stream(e.to_string()))?;
        }
        self.timing.mark_slot_sent(name);
        self.slots_sent.push(name.to_string());

        Ok(())
    }

    /// Send raw bytes. Shell must be sent first.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), PageError> {
        if self.state == SinkState::Initial {
            return Err(PageError::ShellNotSent);
        }
        if self.state == SinkState::Completed {
            return Err(PageError::Stream("sink already completed".to_string()));
        }

        self.inner
            .send(bytes)
            .await
            .map_err(|e| PageError::Stream(e.to_string()))?;

        Ok(())
    }

    /// Complete the response.
    pub async fn complete(&mut self) -> Result<(), PageError> {
        self.inner
            .flush()
            .await
            .map_err(|e| PageError::Stream(e.to_string()))?;
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    /// Get the list of slots sent.
    pub fn slots_sent(&self) -> &[String] {
        &self.slots_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match self.state {
            SinkState::Initial => LifecyclePhase::Start,
            SinkState::ShellSent if self.slots_sent.is_empty() => LifecyclePhase::ShellSent,
            SinkState::ShellSent => {
                LifecyclePhase::SlotSent(self.slots_sent.last().unwrap().clone())
            }
            SinkState::Completed => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

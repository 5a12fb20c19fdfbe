//! The deferred render composer.

use std::fmt::Display;

use futures::stream::{FuturesUnordered, StreamExt};
use futures::Sink;
use vitrine_core::PageError;
use vitrine_streaming::StreamingSink;

use crate::fallback::SlotFailurePolicy;
use crate::slots::SlotSet;

/// A slot whose markup was streamed.
#[derive(Debug, Clone)]
pub struct StreamedSlot {
    /// Slot name.
    pub name: String,
    /// Bytes streamed for the slot (boundary included).
    pub bytes: usize,
    /// Whether the markup came from the failure policy.
    pub used_fallback: bool,
}

/// What the composer did with each slot.
#[derive(Debug, Clone, Default)]
pub struct ComposeSummary {
    /// Slots streamed, in the order they were sent.
    pub streamed: Vec<StreamedSlot>,
    /// Slots that resolved to an empty shape and streamed nothing.
    pub empty: Vec<String>,
    /// Slots that rejected, with their error text.
    pub failed: Vec<(String, String)>,
}

impl ComposeSummary {
    /// Whether a slot's markup was streamed.
    pub fn streamed_slot(&self, name: &str) -> bool {
        self.streamed.iter().any(|s| s.name == name)
    }
}

/// Stream a slot set into the sink.
///
/// Resolved slots stream first, in declared order. Deferred slots are then
/// driven concurrently and stream in settle order - a slow or failed slot
/// never holds up a sibling. Each streamed slot is wrapped in a boundary
/// element carrying its name.
///
/// Errors from the sink abort composition (the response is broken); errors
/// from individual slots do not.
pub async fn compose<S, E>(
    sink: &mut StreamingSink<S, E>,
    slots: SlotSet,
    policy: &SlotFailurePolicy,
) -> Result<ComposeSummary, PageError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let mut summary = ComposeSummary::default();
    let (resolved, deferred) = slots.into_parts();

    for slot in resolved {
        if slot.html.is_empty() {
            summary.empty.push(slot.name);
            continue;
        }
        let html = boundary(&slot.name, &slot.html);
        sink.send_slot(&slot.name, &html).await?;
        summary.streamed.push(StreamedSlot {
            name: slot.name,
            bytes: html.len(),
            used_fallback: false,
        });
    }

    let mut pending: FuturesUnordered<_> = deferred
        .into_iter()
        .map(|slot| {
            let (name, future) = slot.into_parts();
            async move { (name, future.await) }
        })
        .collect();

    while let Some((name, result)) = pending.next().await {
        match result {
            Ok(html) if html.is_empty() => summary.empty.push(name),
            Ok(html) => {
                let html = boundary(&name, &html);
                sink.send_slot(&name, &html).await?;
                summary.streamed.push(StreamedSlot {
                    name,
                    bytes: html.len(),
                    used_fallback: false,
                });
            }
            Err(error) => {
                summary.failed.push((name.clone(), error.to_string()));
                if let Some(html) = policy.markup_for(&name) {
                    let html = boundary(&name, &html);
                    sink.send_slot(&name, &html).await?;
                    summary.streamed.push(StreamedSlot {
                        name,
                        bytes: html.len(),
                        used_fallback: true,
                    });
                }
            }
        }
    }

    Ok(summary)
}

/// Wrap slot markup in its boundary element.
fn boundary(name: &str, html: &str) -> String {
    format!(r#"<div data-slot="{}">{}</div>"#, name, html)
}

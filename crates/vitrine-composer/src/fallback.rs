//! What a rejected slot's boundary shows.

/// Policy applied when a deferred slot rejects.
///
/// The default is silent omission: a failed slot's boundary renders
/// nothing, exactly like an empty result. Siblings are unaffected either
/// way.
#[derive(Debug, Clone, Default)]
pub enum SlotFailurePolicy {
    /// Render nothing for the failed slot.
    #[default]
    Omit,

    /// Render a skeleton placeholder in place of the failed slot.
    Skeleton(String),

    /// Render a visible "content unavailable" note.
    Visible,
}

impl SlotFailurePolicy {
    /// Markup to stream for a failed slot, if any.
    pub fn markup_for(&self, slot: &str) -> Option<String> {
        match self {
            Self::Omit => None,
            Self::Skeleton(html) => Some(html.clone()),
            Self::Visible => Some(format!(
                r#"<div class="slot-unavailable" data-failed-slot="{}">Content unavailable</div>"#,
                html_escape(slot)
            )),
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

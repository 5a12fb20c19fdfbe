//! Page-level timing metrics.

use std::collections::HashMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use vitrine_core::RequestId;

/// Metrics for a single streamed slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotMetrics {
    /// Slot name.
    pub name: String,
    /// Time from request start to slot sent (microseconds).
    pub sent_us: u64,
    /// Bytes sent for this slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Whether the slot's markup came from the failure policy.
    pub used_fallback: bool,
}

/// Metrics for a single page request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Page name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Time to first streamed slot (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_first_slot_us: Option<u64>,
    /// Per-slot timings.
    pub slots: HashMap<String, SlotMetrics>,
    /// Total request duration (microseconds).
    pub total_duration_us: u64,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl PageMetrics {
    /// One-line summary for log output.
    pub fn to_summary(&self) -> String {
        let mut slots: Vec<&SlotMetrics> = self.slots.values().collect();
        slots.sort_by_key(|s| s.sent_us);
        let slot_list: Vec<String> = slots
            .iter()
            .map(|s| {
                if s.used_fallback {
                    format!("{} (fallback)", s.name)
                } else {
                    s.name.clone()
                }
            })
            .collect();

        format!(
            "page={} shell={}us first_slot={}us total={}us slots=[{}]",
            self.page.as_deref().unwrap_or("-"),
            self.time_to_shell_us.unwrap_or(0),
            self.time_to_first_slot_us.unwrap_or(0),
            self.total_duration_us,
            slot_list.join(", ")
        )
    }
}

/// Collector for page metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    page: Option<String>,
    route: Option<String>,
    start: Instant,
    shell_sent: Option<Instant>,
    first_slot_sent: Option<Instant>,
    slots: HashMap<String, SlotMetrics>,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            page: None,
            route: None,
            start: Instant::now(),
            shell_sent: None,
            first_slot_sent: None,
            slots: HashMap::new(),
        }
    }

    /// Set the page name.
    pub fn set_page(&mut self, page: impl Into<String>) {
        self.page = Some(page.into());
    }

    /// Set the route path.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Record that the shell was flushed.
    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    /// Record that a slot's markup was sent.
    pub fn record_slot_sent(&mut self, name: &str, bytes: Option<usize>, used_fallback: bool) {
        let now = Instant::now();
        self.first_slot_sent.get_or_insert(now);
        self.slots.insert(
            name.to_string(),
            SlotMetrics {
                name: name.to_string(),
                sent_us: now.duration_since(self.start).as_micros() as u64,
                bytes,
                used_fallback,
            },
        );
    }

    /// Finalize into reportable metrics.
    pub fn finalize(self, status_code: Option<u16>) -> PageMetrics {
        PageMetrics {
            request_id: self.request_id.to_string(),
            page: self.page,
            route: self.route,
            time_to_shell_us: self
                .shell_sent
                .map(|t| t.duration_since(self.start).as_micros() as u64),
            time_to_first_slot_us: self
                .first_slot_sent
                .map(|t| t.duration_since(self.start).as_micros() as u64),
            slots: self.slots,
            total_duration_us: self.start.elapsed().as_micros() as u64,
            status_code,
        }
    }
}

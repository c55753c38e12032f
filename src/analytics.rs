//! Analytics event boundary.
//!
//! Events are fire-and-forget: `record` returns nothing and must never block
//! the interaction that triggered it. The transport behind the sink is out of
//! scope; the app wires a [`NullSink`] when no collector is configured.

use std::cell::RefCell;
use std::collections::BTreeMap;

/// Event name for star-state changes (and the initial load).
pub const STAR_EVENT: &str = "ui.web.star";

/// Event name for clicks on the star button itself.
pub const STAR_BUTTON_EVENT: &str = "ui.web.sidebarStarButton";

/// An immutable analytics event: a name plus string tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub tags: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    /// Build an event from a name and tag pairs.
    pub fn new(name: &str, tags: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            tags: tags
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    /// Record one event. Must not block or fail visibly.
    fn record(&self, event: AnalyticsEvent);
}

/// Sink that drops every event.
#[derive(Default)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn record(&self, _event: AnalyticsEvent) {}
}

/// Sink that keeps every recorded event in memory, for tests.
#[derive(Default)]
pub struct MemorySink {
    events: RefCell<Vec<AnalyticsEvent>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in emission order.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for MemorySink {
    fn record(&self, event: AnalyticsEvent) {
        self.events.borrow_mut().push(event);
    }
}

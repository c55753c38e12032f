//! Star toggle: the one interaction that mutates the starred set.
//!
//! Emission order is part of the contract: the one-time load event precedes
//! any interaction, and each toggle records the click before the resulting
//! state change.

use anyhow::Result;

use crate::analytics::{AnalyticsEvent, AnalyticsSink, STAR_BUTTON_EVENT, STAR_EVENT};
use crate::starred::StarredSet;

/// Drives star toggles against a [`StarredSet`] and reports them to analytics.
pub struct StarToggleController<'a> {
    sink: &'a dyn AnalyticsSink,
}

impl<'a> StarToggleController<'a> {
    /// Create a controller reporting to `sink`.
    pub fn new(sink: &'a dyn AnalyticsSink) -> Self {
        Self { sink }
    }

    /// Record the one-time load event with the current star count.
    ///
    /// Called once when the sidebar first renders, before any interaction.
    pub fn emit_load(&self, starred: &StarredSet) {
        self.sink.record(AnalyticsEvent::new(
            STAR_EVENT,
            &[("starCount", &starred.len().to_string()), ("action", "load")],
        ));
    }

    /// Toggle the star on `name`, emitting the click/state event pair.
    pub fn toggle(&self, starred: &mut StarredSet, name: &str) -> Result<()> {
        let count = starred.len();
        let was_starred = starred.is_starred(name);

        self.sink.record(AnalyticsEvent::new(
            STAR_BUTTON_EVENT,
            &[
                ("action", "click"),
                ("newStarState", if was_starred { "false" } else { "true" }),
            ],
        ));

        starred.toggle_star(name)?;

        let new_count = if was_starred { count - 1 } else { count + 1 };
        self.sink.record(AnalyticsEvent::new(
            STAR_EVENT,
            &[
                ("starCount", &new_count.to_string()),
                ("action", if was_starred { "unstar" } else { "star" }),
            ],
        ));
        Ok(())
    }
}

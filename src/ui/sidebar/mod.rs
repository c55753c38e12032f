//! Sidebar widget for browsing, starring, and filtering resources.

mod filter;
mod rendering;

use ratatui::widgets::ListState;

use crate::projector::ProjectedList;

pub use filter::FilterKeyResult;
pub use rendering::Sidebar;

/// Bundles the parameters shared across sidebar rendering functions.
pub struct SidebarContext<'a> {
    /// The projected list to display, starred group first
    pub list: &'a ProjectedList,
    /// Whether alerting resources sort first within the unstarred group
    pub alerts_on_top: bool,
    /// Current filter query text (empty = no filter)
    pub filter_query: &'a str,
    /// Whether the filter input is actively accepting keystrokes
    pub filter_active: bool,
    /// Cursor position within the filter input (only used when filter_active)
    pub filter_cursor_pos: usize,
}

/// Sidebar widget state tracking selection and filter input.
pub struct SidebarState {
    /// Ratatui list selection state
    pub list_state: ListState,
    /// Current inline filter query text, mirrored into the options store
    pub filter_query: String,
    /// Cursor position within the filter input
    pub filter_cursor_pos: usize,
    /// Whether the filter input is actively accepting keystrokes
    pub filter_active: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            list_state: ListState::default(),
            filter_query: String::new(),
            filter_cursor_pos: 0,
            filter_active: false,
        }
    }
}

impl SidebarState {
    /// Create a sidebar state with the first item selected and the filter
    /// text restored from persisted options.
    pub fn new(filter_query: String) -> Self {
        let mut state = Self {
            filter_query,
            ..Self::default()
        };
        state.list_state.select(Some(0));
        state
    }

    /// Move the selection down, clamped to the list length.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the selection up.
    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev.min(len - 1)));
    }

    /// Keep the selection within bounds after the list changes size.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(i) if i < len => {}
            _ => self.list_state.select(Some(len - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_moves_within_bounds() {
        let mut state = SidebarState::new(String::new());
        assert_eq!(state.list_state.selected(), Some(0));

        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.list_state.selected(), Some(2));

        state.select_previous(3);
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn empty_list_clears_selection() {
        let mut state = SidebarState::new(String::new());
        state.select_next(0);
        assert_eq!(state.list_state.selected(), None);

        state.select_next(2);
        assert_eq!(state.list_state.selected(), Some(0));
    }
}

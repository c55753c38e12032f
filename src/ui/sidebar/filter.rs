//! Filter input handling for the sidebar.

use crossterm::event::{KeyCode, KeyEvent};

/// Result of processing a key in the filter input
pub enum FilterKeyResult {
    /// No visual change needed
    Continue,
    /// Query text changed -- write through to options and reset selection
    QueryChanged,
    /// Enter pressed -- exit insert mode, keep filter text visible
    Deactivated,
    /// Esc pressed -- clear the filter text entirely
    Cleared,
}

/// Filter-related methods on `SidebarState`.
impl super::SidebarState {
    /// Activate the inline filter input (start accepting keystrokes)
    pub fn activate_filter(&mut self) {
        self.filter_active = true;
        self.filter_cursor_pos = self.filter_query.len();
    }

    /// Whether there is a non-empty filter query
    pub fn has_filter(&self) -> bool {
        !self.filter_query.is_empty()
    }

    /// Width in bytes of the character just before the cursor, if any.
    fn char_width_before_cursor(&self) -> Option<usize> {
        self.filter_query[..self.filter_cursor_pos]
            .chars()
            .next_back()
            .map(char::len_utf8)
    }

    /// Width in bytes of the character at the cursor, if any.
    fn char_width_at_cursor(&self) -> Option<usize> {
        self.filter_query[self.filter_cursor_pos..]
            .chars()
            .next()
            .map(char::len_utf8)
    }

    /// Handle a key event while the filter input is active.
    ///
    /// The cursor is a byte offset that always sits on a char boundary, so
    /// edits step by whole characters regardless of their UTF-8 width.
    pub fn handle_filter_key(&mut self, key: KeyEvent) -> FilterKeyResult {
        match key.code {
            KeyCode::Char(c) => {
                self.filter_query.insert(self.filter_cursor_pos, c);
                self.filter_cursor_pos += c.len_utf8();
                FilterKeyResult::QueryChanged
            }
            KeyCode::Backspace => {
                if let Some(width) = self.char_width_before_cursor() {
                    self.filter_cursor_pos -= width;
                    self.filter_query.remove(self.filter_cursor_pos);
                    FilterKeyResult::QueryChanged
                } else {
                    FilterKeyResult::Continue
                }
            }
            KeyCode::Left => {
                if let Some(width) = self.char_width_before_cursor() {
                    self.filter_cursor_pos -= width;
                }
                FilterKeyResult::Continue
            }
            KeyCode::Right => {
                if let Some(width) = self.char_width_at_cursor() {
                    self.filter_cursor_pos += width;
                }
                FilterKeyResult::Continue
            }
            KeyCode::Enter => {
                self.filter_active = false;
                FilterKeyResult::Deactivated
            }
            KeyCode::Esc => {
                self.filter_query.clear();
                self.filter_cursor_pos = 0;
                self.filter_active = false;
                FilterKeyResult::Cleared
            }
            _ => FilterKeyResult::Continue,
        }
    }
}

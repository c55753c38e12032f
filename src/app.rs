//! Application state: wires the store, preferences, analytics, and sidebar
//! together and routes key events between them.

use std::rc::Rc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::analytics::AnalyticsSink;
use crate::options::SidebarOptionsStore;
use crate::projector::{project, ProjectedList};
use crate::resource::{Resource, SidebarItem};
use crate::starred::StarredSet;
use crate::storage::StateStore;
use crate::toggle::StarToggleController;
use crate::ui::sidebar::{FilterKeyResult, SidebarState};

/// Action returned from key handling
pub enum KeyAction {
    Continue,
    Quit,
}

/// Top-level application state.
pub struct App {
    /// Starred-resource set, persisted write-through
    pub starred: StarredSet,
    /// Display options for this dashboard instance, persisted write-through
    pub options: SidebarOptionsStore,
    /// Analytics destination
    sink: Rc<dyn AnalyticsSink>,
    /// Current sidebar rows, rebuilt whenever upstream resource data changes
    pub items: Vec<SidebarItem>,
    /// Sidebar selection and filter input state
    pub sidebar: SidebarState,
}

impl App {
    /// Build the app from a resource snapshot and persisted preferences.
    ///
    /// Emits the one-time `load` analytics event with the restored star
    /// count, before any interaction is processed.
    pub fn new(
        store: Rc<dyn StateStore>,
        sink: Rc<dyn AnalyticsSink>,
        resources: &[Resource],
        scope_token: &str,
    ) -> Self {
        let starred = StarredSet::load(store.clone());
        let options = SidebarOptionsStore::load(store, scope_token);
        let items: Vec<SidebarItem> = resources.iter().map(SidebarItem::new).collect();
        let sidebar = SidebarState::new(options.options().filter_text().to_string());

        StarToggleController::new(sink.as_ref()).emit_load(&starred);

        Self {
            starred,
            options,
            sink,
            items,
            sidebar,
        }
    }

    /// Replace the sidebar rows with a fresh resource snapshot.
    pub fn set_resources(&mut self, resources: &[Resource]) {
        self.items = resources.iter().map(SidebarItem::new).collect();
        let len = self.projected().len();
        self.sidebar.clamp_selection(len);
    }

    /// The displayed list derived from current items, stars, and options.
    pub fn projected(&self) -> ProjectedList {
        project(&self.items, &self.starred, self.options.options())
    }

    /// Handle one key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<KeyAction> {
        if self.sidebar.filter_active {
            match self.sidebar.handle_filter_key(key) {
                FilterKeyResult::QueryChanged | FilterKeyResult::Cleared => {
                    // Write the full options object through on every keystroke
                    self.options
                        .set_resource_name_filter(self.sidebar.filter_query.clone())?;
                    self.reset_selection();
                }
                FilterKeyResult::Continue | FilterKeyResult::Deactivated => {}
            }
            return Ok(KeyAction::Continue);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(KeyAction::Quit),
            KeyCode::Char('j') | KeyCode::Down => {
                let len = self.projected().len();
                self.sidebar.select_next(len);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let len = self.projected().len();
                self.sidebar.select_previous(len);
            }
            KeyCode::Char('s') | KeyCode::Enter => self.toggle_selected_star()?,
            KeyCode::Char('a') => {
                let alerts_on_top = !self.options.options().alerts_on_top;
                self.options.set_alerts_on_top(alerts_on_top)?;
            }
            KeyCode::Char('/') => self.sidebar.activate_filter(),
            KeyCode::Esc if self.sidebar.has_filter() => {
                self.sidebar.filter_query.clear();
                self.sidebar.filter_cursor_pos = 0;
                self.options.set_resource_name_filter(String::new())?;
                self.reset_selection();
            }
            _ => {}
        }
        Ok(KeyAction::Continue)
    }

    /// Toggle the star on the currently selected row.
    fn toggle_selected_star(&mut self) -> Result<()> {
        let projected = self.projected();
        let name = match self
            .sidebar
            .list_state
            .selected()
            .and_then(|i| projected.get(i))
        {
            Some(item) => item.name.clone(),
            None => return Ok(()),
        };

        let sink = Rc::clone(&self.sink);
        StarToggleController::new(sink.as_ref()).toggle(&mut self.starred, &name)?;

        // The row may have moved between groups; keep the selection in bounds
        let len = self.projected().len();
        self.sidebar.clamp_selection(len);
        Ok(())
    }

    /// Reset the selection to the top after the list contents change.
    fn reset_selection(&mut self) {
        if self.projected().is_empty() {
            self.sidebar.list_state.select(None);
        } else {
            self.sidebar.list_state.select(Some(0));
        }
    }
}

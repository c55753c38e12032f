//! Sidebar display options and their write-through store.

use std::rc::Rc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::storage::{PersistentAccessor, StateStore, StoreScope};

/// Logical storage key for sidebar options.
pub const SIDEBAR_OPTIONS_KEY: &str = "sidebar_options";

/// User-controlled display options for the sidebar.
///
/// `resource_name_filter` of `None` and `Some("")` both mean "no filtering"
/// and behave identically everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidebarOptions {
    /// Sort alerting resources ahead of healthy ones within the unstarred group
    pub alerts_on_top: bool,
    /// Case-sensitive substring filter on resource names
    pub resource_name_filter: Option<String>,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            alerts_on_top: false,
            resource_name_filter: Some(String::new()),
        }
    }
}

impl SidebarOptions {
    /// The effective filter text; absent and empty are the same.
    pub fn filter_text(&self) -> &str {
        self.resource_name_filter.as_deref().unwrap_or("")
    }
}

/// Holds the current options and writes the full object through on every
/// mutation, so a reader never observes a half-updated value.
pub struct SidebarOptionsStore {
    options: SidebarOptions,
    accessor: PersistentAccessor<SidebarOptions>,
}

impl SidebarOptionsStore {
    /// Load persisted options for `scope_token`, or defaults if none exist.
    ///
    /// Options are scoped per dashboard instance so two dashboards pointed at
    /// different workspaces keep independent preferences.
    pub fn load(store: Rc<dyn StateStore>, scope_token: &str) -> Self {
        let scope = StoreScope::Token(scope_token.to_string());
        let accessor = PersistentAccessor::new(store, SIDEBAR_OPTIONS_KEY, &scope);
        let options = accessor.get().unwrap_or_default();
        Self { options, accessor }
    }

    /// Current options.
    pub fn options(&self) -> &SidebarOptions {
        &self.options
    }

    /// Set the alerts-on-top flag and persist.
    pub fn set_alerts_on_top(&mut self, alerts_on_top: bool) -> Result<()> {
        self.options.alerts_on_top = alerts_on_top;
        self.accessor.set(&self.options)
    }

    /// Set the name filter text and persist.
    pub fn set_resource_name_filter(&mut self, filter: String) -> Result<()> {
        self.options.resource_name_filter = Some(filter);
        self.accessor.set(&self.options)
    }
}

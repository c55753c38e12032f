//! The starred ("pinned") resource set.
//!
//! An ordered set of resource names persisted write-through on every
//! mutation. Insertion order drives the display order of starred items.

use std::rc::Rc;

use anyhow::Result;

use crate::storage::{PersistentAccessor, StateStore, StoreScope};

/// Logical storage key for the starred-resource list.
pub const STARRED_RESOURCES_KEY: &str = "pinned-resources";

/// Ordered set of starred resource names, persisted across sessions.
///
/// Names for resources that no longer exist are kept; they simply produce no
/// visible row until the resource comes back.
pub struct StarredSet {
    names: Vec<String>,
    accessor: PersistentAccessor<Vec<String>>,
}

impl StarredSet {
    /// Load the persisted set, or start empty if nothing (valid) is stored.
    ///
    /// The starred list is shared across all dashboard instances, so it is
    /// never scoped by a workspace token.
    pub fn load(store: Rc<dyn StateStore>) -> Self {
        let accessor = PersistentAccessor::new(store, STARRED_RESOURCES_KEY, &StoreScope::Shared);
        let names = accessor.get().unwrap_or_default();
        Self { names, accessor }
    }

    /// Whether `name` is currently starred.
    pub fn is_starred(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of starred names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Starred names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of `name` in the star order, if starred.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Flip membership of `name` and persist the full list.
    ///
    /// A newly starred name goes to the end of the order; unstarring keeps
    /// the relative order of the rest. Starring a name again after unstarring
    /// appends it at the end rather than restoring its old position.
    pub fn toggle_star(&mut self, name: &str) -> Result<()> {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
        } else {
            self.names.push(name.to_string());
        }
        self.accessor.set(&self.names)
    }
}

//! Pure projection of raw sidebar items into the displayed list.
//!
//! `project` is deterministic and side-effect-free: identical inputs always
//! produce identical output, independent of storage or rendering.

use crate::options::SidebarOptions;
use crate::resource::SidebarItem;
use crate::starred::StarredSet;

/// The displayed list: starred items first, then everything else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectedList {
    /// Starred items, in star insertion order
    pub starred: Vec<SidebarItem>,
    /// Remaining items, in input order (alerting-first when enabled)
    pub unstarred: Vec<SidebarItem>,
}

impl ProjectedList {
    /// Total number of displayed rows.
    pub fn len(&self) -> usize {
        self.starred.len() + self.unstarred.len()
    }

    /// Whether nothing is displayed (e.g. the filter matched no names).
    pub fn is_empty(&self) -> bool {
        self.starred.is_empty() && self.unstarred.is_empty()
    }

    /// Item at a flat display index spanning both groups.
    pub fn get(&self, index: usize) -> Option<&SidebarItem> {
        if index < self.starred.len() {
            self.starred.get(index)
        } else {
            self.unstarred.get(index - self.starred.len())
        }
    }

    /// Iterate rows in display order, starred group first.
    pub fn iter(&self) -> impl Iterator<Item = &SidebarItem> {
        self.starred.iter().chain(self.unstarred.iter())
    }
}

/// Derive the displayed list from raw items, the starred set, and options.
///
/// Starred items come first in star order; unstarred items keep input order,
/// stable-partitioned alerting-first when `alerts_on_top` is set. A non-empty
/// filter keeps only names containing it as a case-sensitive substring and
/// applies to both groups.
pub fn project(
    items: &[SidebarItem],
    starred: &StarredSet,
    options: &SidebarOptions,
) -> ProjectedList {
    let (mut starred_items, unstarred_items): (Vec<&SidebarItem>, Vec<&SidebarItem>) =
        items.iter().partition(|item| starred.is_starred(&item.name));

    starred_items.sort_by_key(|item| starred.position(&item.name));

    let unstarred_items: Vec<&SidebarItem> = if options.alerts_on_top {
        let (alerting, healthy): (Vec<&SidebarItem>, Vec<&SidebarItem>) =
            unstarred_items.into_iter().partition(|item| item.alerting);
        alerting.into_iter().chain(healthy).collect()
    } else {
        unstarred_items
    };

    let filter = options.filter_text();
    let keep = |item: &&SidebarItem| filter.is_empty() || item.name.contains(filter);

    ProjectedList {
        starred: starred_items.into_iter().filter(keep).cloned().collect(),
        unstarred: unstarred_items.into_iter().filter(keep).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::resource::ResourceStatus;
    use crate::storage::MemoryStore;

    fn item(name: &str, alerting: bool) -> SidebarItem {
        SidebarItem {
            name: name.to_string(),
            status: if alerting { ResourceStatus::Error } else { ResourceStatus::Ok },
            alerting,
        }
    }

    fn starred_with(names: &[&str]) -> StarredSet {
        let mut set = StarredSet::load(Rc::new(MemoryStore::new()));
        for name in names {
            set.toggle_star(name).unwrap();
        }
        set
    }

    fn displayed_names(list: &ProjectedList) -> Vec<&str> {
        list.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn preserves_input_order_without_options() {
        let items = [item("vigoda", true), item("a", false), item("b", false)];
        let list = project(&items, &starred_with(&[]), &SidebarOptions::default());
        assert!(list.starred.is_empty());
        assert_eq!(displayed_names(&list), ["vigoda", "a", "b"]);
    }

    #[test]
    fn starred_items_come_first_in_star_order() {
        let items = [item("a", false), item("b", false), item("c", false)];
        let list = project(&items, &starred_with(&["c", "a"]), &SidebarOptions::default());
        assert_eq!(displayed_names(&list), ["c", "a", "b"]);
    }

    #[test]
    fn alerts_on_top_stable_sorts_unstarred_only() {
        let items = [
            item("a", false),
            item("vigoda", true),
            item("b", false),
            item("c", true),
        ];
        let options = SidebarOptions {
            alerts_on_top: true,
            ..SidebarOptions::default()
        };

        // vigoda/c move up but keep their relative order; so do a/b.
        let list = project(&items, &starred_with(&[]), &options);
        assert_eq!(displayed_names(&list), ["vigoda", "c", "a", "b"]);

        // A starred healthy item still precedes unstarred alerting ones.
        let list = project(&items, &starred_with(&["b"]), &options);
        assert_eq!(displayed_names(&list), ["b", "vigoda", "c", "a"]);
    }

    #[test]
    fn filter_is_case_sensitive_substring_on_both_groups() {
        let items = [item("vigoda", true), item("a", false), item("b", false)];
        let options = SidebarOptions {
            resource_name_filter: Some("vig".to_string()),
            ..SidebarOptions::default()
        };

        let list = project(&items, &starred_with(&[]), &options);
        assert_eq!(displayed_names(&list), ["vigoda"]);

        let list = project(&items, &starred_with(&["a", "vigoda"]), &options);
        assert_eq!(displayed_names(&list), ["vigoda"]);
        assert_eq!(list.starred.len(), 1);

        let options = SidebarOptions {
            resource_name_filter: Some("VIG".to_string()),
            ..SidebarOptions::default()
        };
        assert!(project(&items, &starred_with(&[]), &options).is_empty());
    }

    #[test]
    fn absent_and_empty_filter_project_identically() {
        let items = [item("vigoda", true), item("a", false), item("b", false)];
        let empty = SidebarOptions {
            resource_name_filter: Some(String::new()),
            ..SidebarOptions::default()
        };
        let absent = SidebarOptions {
            resource_name_filter: None,
            ..SidebarOptions::default()
        };

        let starred = starred_with(&["b"]);
        assert_eq!(
            project(&items, &starred, &empty),
            project(&items, &starred, &absent)
        );
        assert_eq!(displayed_names(&project(&items, &starred, &empty)), ["b", "vigoda", "a"]);
    }

    #[test]
    fn starred_names_without_matching_items_are_silent() {
        let items = [item("a", false)];
        let list = project(&items, &starred_with(&["gone", "a"]), &SidebarOptions::default());
        assert_eq!(displayed_names(&list), ["a"]);
        assert_eq!(list.starred.len(), 1);
    }

    #[test]
    fn flat_index_spans_both_groups() {
        let items = [item("a", false), item("b", false), item("c", false)];
        let list = project(&items, &starred_with(&["c"]), &SidebarOptions::default());
        assert_eq!(list.get(0).map(|i| i.name.as_str()), Some("c"));
        assert_eq!(list.get(1).map(|i| i.name.as_str()), Some("a"));
        assert_eq!(list.get(2).map(|i| i.name.as_str()), Some("b"));
        assert_eq!(list.get(3), None);
        assert_eq!(list.len(), 3);
    }
}

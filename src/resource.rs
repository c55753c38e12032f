//! Resource data model and the sidebar's view of it.
//!
//! Resources arrive from outside the core (a snapshot file, a dashboard
//! backend); this module never creates, fetches, or mutates them. The
//! `alerting` flag is computed upstream and consumed as given.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Health state of a resource, as reported by the dashboard backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    #[default]
    Ok,
    Pending,
    Error,
}

/// A monitored unit (service/build target) shown in the sidebar.
///
/// `name` is the immutable identity key; no two resources share one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default)]
    pub alerting: bool,
}

/// View model for one sidebar row: a thin projection of a [`Resource`].
///
/// Rebuilt whenever upstream resource data changes; carries no identity
/// beyond `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub name: String,
    pub status: ResourceStatus,
    pub alerting: bool,
}

impl SidebarItem {
    /// Project a resource into its sidebar row.
    pub fn new(resource: &Resource) -> Self {
        Self {
            name: resource.name.clone(),
            status: resource.status,
            alerting: resource.alerting,
        }
    }
}

/// Load a resource snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<Vec<Resource>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read resource snapshot: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse resource snapshot: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_projects_resource_fields() {
        let res = Resource {
            name: "vigoda".to_string(),
            status: ResourceStatus::Error,
            alerting: true,
        };
        let item = SidebarItem::new(&res);
        assert_eq!(item.name, "vigoda");
        assert_eq!(item.status, ResourceStatus::Error);
        assert!(item.alerting);
    }

    #[test]
    fn snapshot_fields_default_when_omitted() {
        let parsed: Vec<Resource> = serde_json::from_str(r#"[{"name": "snack"}]"#).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].status, ResourceStatus::Ok);
        assert!(!parsed[0].alerting);
    }

    #[test]
    fn load_snapshot_reports_missing_file() {
        let err = load_snapshot(Path::new("/nonexistent/resources.json")).unwrap_err();
        assert!(err.to_string().contains("resource snapshot"));
    }
}

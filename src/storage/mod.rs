//! Persistent key-value storage for user preferences.
//!
//! Values are JSON text keyed by a logical key plus a scope. The store itself
//! is a small trait so the same preference code runs against an on-disk store
//! in the app and an in-memory store in tests.

mod accessor;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub use accessor::PersistentAccessor;

/// Scope half of a storage key.
///
/// Scoped values (e.g. sidebar options) are partitioned by a caller-supplied
/// token so two dashboard instances never see each other's preferences.
/// Shared values (e.g. the pinned-resource list) use one scope everywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreScope {
    /// Single scope shared by every dashboard instance
    Shared,
    /// Caller-supplied scope token (e.g. a workspace identifier)
    Token(String),
}

impl fmt::Display for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreScope::Shared => f.write_str("shared"),
            StoreScope::Token(token) => f.write_str(token),
        }
    }
}

/// Compose the full storage key from a logical key and a scope.
pub fn compose_key(key: &str, scope: &StoreScope) -> String {
    format!("{key}:{scope}")
}

/// Raw JSON-text storage keyed by composed key strings.
///
/// `get_raw` treats unreadable values as absent; decode errors surface at the
/// typed [`PersistentAccessor`] layer, also as absence.
pub trait StateStore {
    /// Read the raw JSON text stored at `key`, or `None` if absent/unreadable
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Write raw JSON text at `key`, replacing any previous value
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Remove every stored value across all keys and scopes
    fn clear(&self) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.values.borrow_mut().clear();
        Ok(())
    }
}

/// On-disk store: one JSON file per composed key under the config directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store in the default location (`<config dir>/dashtui/state`).
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("dashtui")
            .join("state");
        Self::with_dir(dir)
    }

    /// Open the store in an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create state directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Composed keys contain `:` separators; filenames replace them.
    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key.replace([':', '/'], "_")))
    }
}

impl StateStore for FileStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write state file: {}", path.display()))
    }

    fn clear(&self) -> Result<()> {
        for entry in std::fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read state directory: {}", self.dir.display()))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                std::fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove state file: {}", path.display()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_raw_values() {
        let store = MemoryStore::new();
        assert_eq!(store.get_raw("a:shared"), None);

        store.set_raw("a:shared", "[1,2]").unwrap();
        assert_eq!(store.get_raw("a:shared").as_deref(), Some("[1,2]"));

        store.clear().unwrap();
        assert_eq!(store.get_raw("a:shared"), None);
    }

    #[test]
    fn composed_keys_separate_scopes() {
        assert_eq!(compose_key("sidebar_options", &StoreScope::Shared), "sidebar_options:shared");
        assert_eq!(
            compose_key("sidebar_options", &StoreScope::Token("ws1".to_string())),
            "sidebar_options:ws1"
        );
    }

    #[test]
    fn file_store_round_trips_and_clears() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::with_dir(tmp.path().join("state")).unwrap();

        store.set_raw("pinned-resources:shared", "[\"snack\"]").unwrap();
        assert_eq!(
            store.get_raw("pinned-resources:shared").as_deref(),
            Some("[\"snack\"]")
        );

        store.clear().unwrap();
        assert_eq!(store.get_raw("pinned-resources:shared"), None);
    }

    #[test]
    fn file_store_reads_missing_key_as_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::with_dir(tmp.path().to_path_buf()).unwrap();
        assert_eq!(store.get_raw("nope:shared"), None);
    }
}

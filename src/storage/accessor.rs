//! Typed accessor over the raw state store.

use std::marker::PhantomData;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{compose_key, StateStore, StoreScope};

/// Typed get/set wrapper bound to one logical key and scope.
///
/// Reads never fail: an absent or undecodable stored value is `None`, and the
/// caller falls back to its default. Writes propagate store errors.
pub struct PersistentAccessor<T> {
    store: Rc<dyn StateStore>,
    key: String,
    _value: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> PersistentAccessor<T> {
    /// Create an accessor for `key` in `scope` over the given store.
    pub fn new(store: Rc<dyn StateStore>, key: &str, scope: &StoreScope) -> Self {
        Self {
            store,
            key: compose_key(key, scope),
            _value: PhantomData,
        }
    }

    /// Read and decode the stored value, if any.
    pub fn get(&self) -> Option<T> {
        let raw = self.store.get_raw(&self.key)?;
        serde_json::from_str(&raw).ok()
    }

    /// Encode `value` and write it through to the store.
    pub fn set(&self, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize value for {}", self.key))?;
        self.store.set_raw(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn accessor<T: Serialize + DeserializeOwned>(
        store: &Rc<MemoryStore>,
        key: &str,
        scope: StoreScope,
    ) -> PersistentAccessor<T> {
        PersistentAccessor::new(store.clone(), key, &scope)
    }

    #[test]
    fn get_returns_none_when_nothing_stored() {
        let store = Rc::new(MemoryStore::new());
        let acc: PersistentAccessor<Vec<String>> = accessor(&store, "k", StoreScope::Shared);
        assert_eq!(acc.get(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = Rc::new(MemoryStore::new());
        let acc: PersistentAccessor<Vec<String>> = accessor(&store, "k", StoreScope::Shared);

        acc.set(&vec!["snack".to_string()]).unwrap();
        assert_eq!(acc.get(), Some(vec!["snack".to_string()]));
    }

    #[test]
    fn corrupt_stored_json_reads_as_absent() {
        let store = Rc::new(MemoryStore::new());
        store.set_raw("k:shared", "{not json").unwrap();

        let acc: PersistentAccessor<Vec<String>> = accessor(&store, "k", StoreScope::Shared);
        assert_eq!(acc.get(), None);
    }

    #[test]
    fn same_key_different_scopes_are_isolated() {
        let store = Rc::new(MemoryStore::new());
        let a: PersistentAccessor<u32> =
            accessor(&store, "k", StoreScope::Token("one".to_string()));
        let b: PersistentAccessor<u32> =
            accessor(&store, "k", StoreScope::Token("two".to_string()));

        a.set(&1).unwrap();
        assert_eq!(a.get(), Some(1));
        assert_eq!(b.get(), None);

        b.set(&2).unwrap();
        assert_eq!(a.get(), Some(1));
        assert_eq!(b.get(), Some(2));
    }
}

//! Key-value storage contract for small JSON documents persisted by content providers.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Boxed, non-`Send` future returned by [`KeyValueStore`] methods.
pub type KeyValueFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service storing one raw JSON string per key.
///
/// There is no schema versioning: callers own the encoding of their value.
pub trait KeyValueStore {
    /// Reads the raw JSON stored under `key`, or `None` when the key was never written.
    fn load_raw<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<Option<String>, String>>;

    /// Replaces the raw JSON stored under `key`.
    fn save_raw<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> KeyValueFuture<'a, Result<(), String>>;

    /// Removes `key`; removing a missing key succeeds.
    fn remove<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that never holds anything. Loads report a missing key and writes succeed.
pub struct NoopKeyValueStore;

impl KeyValueStore for NoopKeyValueStore {
    fn load_raw<'a>(&'a self, _key: &'a str) -> KeyValueFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_raw<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> KeyValueFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn remove<'a>(&'a self, _key: &'a str) -> KeyValueFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Shared in-memory store. Clones observe the same entries.
pub struct MemoryKeyValueStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Returns the raw JSON under `key` without going through the async interface.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load_raw<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.peek(key)) })
    }

    fn save_raw<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> KeyValueFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn remove<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.entries.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads `key` from `store` and decodes it as `T`.
///
/// # Errors
///
/// Returns an error when the store read fails or the stored JSON does not decode as `T`.
pub async fn load_json_with<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_raw(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| format!("decode `{key}`: {e}"))
}

/// Encodes `value` as JSON and stores it under `key`.
///
/// # Errors
///
/// Returns an error when encoding or the store write fails.
pub async fn save_json_with<S: KeyValueStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| format!("encode `{key}`: {e}"))?;
    store.save_raw(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        size: String,
    }

    #[test]
    fn memory_store_shares_entries_between_clones() {
        let store = MemoryKeyValueStore::default();
        let other = store.clone();

        block_on(store.save_raw("k", "[1,2]")).expect("save");
        assert_eq!(other.peek("k"), Some("[1,2]".to_string()));

        block_on(other.remove("k")).expect("remove");
        assert_eq!(block_on(store.load_raw("k")).expect("load"), None);
    }

    #[test]
    fn typed_helpers_preserve_list_order() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;
        let entries = vec![
            Entry {
                name: "b.txt".to_string(),
                size: "1 KB".to_string(),
            },
            Entry {
                name: "a.txt".to_string(),
                size: "2 KB".to_string(),
            },
        ];

        block_on(save_json_with(store_obj, "list", &entries)).expect("save");
        let loaded: Option<Vec<Entry>> = block_on(load_json_with(store_obj, "list")).expect("load");

        assert_eq!(loaded, Some(entries));
    }

    #[test]
    fn decode_failure_names_the_key() {
        let store = MemoryKeyValueStore::default();
        block_on(store.save_raw("broken", "{not json")).expect("save");

        let err = block_on(load_json_with::<_, Vec<Entry>>(&store, "broken")).unwrap_err();
        assert!(err.contains("broken"), "{err}");
    }

    #[test]
    fn noop_store_is_always_empty() {
        let store = NoopKeyValueStore;
        block_on(store.save_raw("k", "1")).expect("save");
        assert_eq!(block_on(store.load_raw("k")).expect("load"), None);
    }
}

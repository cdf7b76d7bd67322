//! `localStorage`-backed [`KeyValueStore`].
//!
//! The browser API is synchronous; the async trait methods resolve immediately.

use platform_host::{KeyValueFuture, KeyValueStore};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, Copy, Default)]
/// Key-value store backed by `window.localStorage`.
pub struct WebKeyValueStore;

impl WebKeyValueStore {
    /// Reads the raw string under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when `localStorage` is unavailable (private mode, sandboxed iframe) or
    /// the read throws.
    pub fn get(self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| format!("localStorage get_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    /// Writes the raw string under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when `localStorage` is unavailable or the quota is exceeded.
    pub fn set(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    /// Removes `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when `localStorage` is unavailable or the removal throws.
    pub fn delete(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Reads and decodes a typed value, treating any failure as absent.
    pub fn get_typed<T: DeserializeOwned>(self, key: &str) -> Option<T> {
        let raw = self.get(key).ok()??;
        serde_json::from_str(&raw).ok()
    }

    /// Encodes and writes a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error when encoding or the write fails.
    pub fn set_typed<T: Serialize>(self, key: &str, value: &T) -> Result<(), String> {
        let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
        self.set(key, &raw)
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl KeyValueStore for WebKeyValueStore {
    fn load_raw<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { store.get(key) })
    }

    fn save_raw<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> KeyValueFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.set(key, raw_json) })
    }

    fn remove<'a>(&'a self, key: &'a str) -> KeyValueFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.delete(key) })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_fallback_behaves_like_an_empty_store() {
        let store = WebKeyValueStore;
        block_on(store.save_raw("k", "[]")).expect("save");
        assert_eq!(block_on(store.load_raw("k")).expect("load"), None);
        assert_eq!(store.get_typed::<Vec<u8>>("k"), None);
    }
}

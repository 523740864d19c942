//! Browser Storage Backend
//!
//! `window.localStorage` behind the tracker's key-value interface.

use nutrition_tracker::store::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// Key-value store over `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Unavailable(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        // Quota errors surface here
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

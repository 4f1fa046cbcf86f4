//! Browser Local Storage
//!
//! Looks up `window.localStorage` on every call, so the handle is a
//! zero-sized `Copy` value that can live inside reactive signals.

use wasm_bindgen::JsValue;

use super::traits::KeyValueStorage;
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::Storage("no window".into()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Storage("localStorage is disabled".into()))
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Storage(format!("{:?}", value))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

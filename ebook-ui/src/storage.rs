//! Browser Storage
//!
//! `window.localStorage` behind the profile storage trait.

use ebook::profile::{KeyValueStorage, ProfileError, ProfileResult};
use wasm_bindgen::JsValue;

/// The browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> ProfileResult<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| ProfileError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| ProfileError::Storage("localStorage is unavailable".to_string()))
    }
}

fn js_error(err: JsValue) -> ProfileError {
    ProfileError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> ProfileResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> ProfileResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

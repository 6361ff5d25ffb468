//! `localStorage` session cache

use subscription_manager::{KeyValueCache, SessionError, SessionResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Session cache over `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageCache;

impl LocalStorageCache {
    fn storage() -> SessionResult<Storage> {
        let window = web_sys::window().ok_or_else(|| SessionError::Cache("no window".into()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| SessionError::Cache("localStorage unavailable".into()))
    }
}

fn js_error(value: JsValue) -> SessionError {
    let err = SessionError::Cache(format!("{:?}", value));
    web_sys::console::error_1(&format!("Session cache: {}", err).into());
    err
}

impl KeyValueCache for LocalStorageCache {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}

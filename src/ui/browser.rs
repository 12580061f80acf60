//! Browser bindings for storage, navigation and history
//!
//! On the server these are inert: storage and navigation report
//! `Unavailable` and history updates do nothing.

use crate::core::{KeyValueStore, NavigationError, Navigator, StorageError};

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

/// `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

#[cfg(feature = "hydrate")]
impl Navigator for BrowserNavigator {
    fn redirect(&self, route: &str) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::Unavailable)?;
        window
            .location()
            .set_href(route)
            .map_err(|e| NavigationError::Redirect {
                route: route.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// Replace the current history entry with `path`, without navigating
#[cfg(feature = "hydrate")]
pub fn replace_history_path(path: &str) {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return;
    };
    let replaced = window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(path)));
    if let Err(e) = replaced {
        leptos::logging::warn!("history.replaceState failed: {:?}", e);
    }
}

/// Server stubs
#[cfg(not(feature = "hydrate"))]
impl KeyValueStore for BrowserStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(not(feature = "hydrate"))]
impl Navigator for BrowserNavigator {
    fn redirect(&self, _route: &str) -> Result<(), NavigationError> {
        Err(NavigationError::Unavailable)
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn replace_history_path(_path: &str) {}

//! Session persistence in `window.localStorage`.
//!
//! Keys are shared with the native client (`token`, `user`), so the same
//! [`SessionStore`] logic runs in the browser.

use cartel::{SessionError, SessionResult, SessionStore, StorageBackend};
use web_sys::Storage;

/// `localStorage` behind the [`StorageBackend`] seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    fn storage(&self) -> SessionResult<Storage> {
        web_sys::window()
            .ok_or_else(|| SessionError::Storage("no global window".to_string()))?
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_string()))
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}

/// The browser session store.
pub fn session_store() -> SessionStore<LocalStorageBackend> {
    SessionStore::new(LocalStorageBackend)
}

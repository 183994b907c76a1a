//! `window.localStorage` behind the core `KeyValueStore` trait. Storage can be
//! missing (private mode, sandboxed frames) or reject writes (quota); both
//! surface as `roster::Error::Storage`.

use roster::{Error, KeyValueStore, Result};
use web_sys::Storage;

#[derive(Clone, Debug)]
pub struct BrowserStorage {
    inner: Option<Storage>,
}

impl BrowserStorage {
    /// Binds to the window's local storage; an unavailable store is kept as
    /// `None` so reads behave like an empty store and writes fail.
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if inner.is_none() {
            tracing::warn!("localStorage is unavailable; sessions will not persist");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| Error::Storage("localStorage is unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match &self.inner {
            Some(storage) => storage
                .get_item(key)
                .map_err(|_| Error::Storage(format!("failed to read {key}"))),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| Error::Storage(format!("failed to write {key}")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match &self.inner {
            Some(storage) => storage
                .remove_item(key)
                .map_err(|_| Error::Storage(format!("failed to remove {key}"))),
            None => Ok(()),
        }
    }
}

//! Key-value persistence used for the session. The browser implementation lives
//! in the web app; `MemoryStore` backs tests and non-browser hosts.

use crate::{
    error::{Error, Result},
    types::Session,
};
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use tracing::warn;

/// Durable string storage keyed by name, e.g. `window.localStorage`.
pub trait KeyValueStore {
    /// # Errors
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// # Errors
    /// Returns an error if the value cannot be written (quota, private mode).
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// # Errors
    /// Returns an error if the backing store rejects the removal.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Reads the persisted session. `Ok(None)` when nothing is stored.
///
/// # Errors
/// Returns an error if storage is unreadable, the JSON is malformed, or the
/// stored session breaks the authenticated/user/token invariant.
pub fn read_session<S: KeyValueStore + ?Sized>(
    storage: &S,
    key: &str,
) -> Result<Option<Session>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    let session: Session = serde_json::from_str(&raw)?;
    if !session.is_consistent() {
        return Err(Error::InvalidSession(
            "isAuthenticated disagrees with user/token",
        ));
    }
    Ok(Some(session))
}

/// Best-effort load used at startup: any failure yields the empty session.
pub fn load_session<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> Session {
    match read_session(storage, key) {
        Ok(session) => session.unwrap_or_default(),
        Err(err) => {
            warn!(key, error = %err, "discarding persisted session");
            Session::default()
        }
    }
}

/// # Errors
/// Returns an error if the session cannot be encoded or written.
pub fn write_session<S: KeyValueStore + ?Sized>(
    storage: &S,
    key: &str,
    session: &Session,
) -> Result<()> {
    let encoded = serde_json::to_string(session)?;
    storage.set(key, &encoded)
}

/// Token from the persisted session, if any. Read errors mean no token.
pub fn persisted_token<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> Option<String> {
    let raw = storage.get(key).ok().flatten()?;
    let session: Session = serde_json::from_str(&raw).ok()?;
    session.token.filter(|token| !token.is_empty())
}

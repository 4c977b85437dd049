//! Durable client-side storage.
//!
//! The browser's local storage is modelled as a string key/value store behind
//! [`KeyValueStore`] so the auditor selection and auth session logic can run
//! against [`MemoryStore`] off the browser.

pub mod auth;
pub mod selection;

#[cfg(feature = "web")]
pub mod local;

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::error::StorageError;

#[cfg(feature = "web")]
pub use local::LocalStorage;

/// String valued key/value storage that survives an application reload.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str);
}

/// Names of every storage key the client writes, derived from the configured prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub auditor_selection: String,
    pub legacy_target_company: String,
    pub legacy_auditor_mode: String,
    pub auth_session: String,
}

impl StorageKeys {
    pub fn new(prefix: &str) -> Self {
        Self {
            auditor_selection: format!("{}_auditor_selection", prefix),
            legacy_target_company: format!("{}_target_company", prefix),
            legacy_auditor_mode: format!("{}_auditor_mode", prefix),
            auth_session: format!("{}_auth_session", prefix),
        }
    }
}

/// In-memory store, clones share the same entries.
///
/// Sharing lets a test drop a session and restore a fresh one from the
/// "same device".
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

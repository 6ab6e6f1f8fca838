//! Persistent word storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bridge only ever reads or overwrites a whole value under one key, so
//! the store seam is a plain get/set pair. [`MemoryStore`] backs native
//! builds and tests; `LocalStorage` wraps `window.localStorage` in the
//! `browser` build.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;

/// Whole-value string store keyed by name.
pub trait WordStore {
    /// Read the value under `key`, `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: WordStore + ?Sized> WordStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: WordStore + ?Sized> WordStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory store with interior mutability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Number of successful `set` calls.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl WordStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "browser")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(feature = "browser")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            // Access throws in some sandboxed iframes and privacy modes.
            Ok(None) | Err(_) => Err(StorageError::Unavailable),
        }
    }
}

#[cfg(feature = "browser")]
impl WordStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write(format!("{err:?}")))
    }
}

//! Durable key/value storage for the theme preference.
//!
//! This module provides:
//!
//! - [`Storage`]: The string key/value store the manager persists into
//! - [`MemoryStorage`]: A shared in-process store
//! - [`FileStorage`]: A JSON file store that survives restarts
//! - [`StorageError`]: Errors raised by a backend
//!
//! The manager never propagates these errors; see [`crate::ThemeManager`].

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// A string-valued key/value store.
pub trait Storage: Send {
    /// Reads `key`, returning `None` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

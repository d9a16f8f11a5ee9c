//! Cart badge count read from the persisted key-value store.
//!
//! The store is a JSON object mapping keys to string values. The cart key
//! holds a serialized JSON list; the badge shows its length.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse storage file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view of the persisted key-value store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalStorage {
    entries: HashMap<String, String>,
}

impl LocalStorage {
    /// Loads the store at `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(StorageError::ReadError {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        };

        let entries = serde_json::from_str(&content).map_err(|e| StorageError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for LocalStorage {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Number of items in the cart list stored under `key`.
///
/// A missing key counts as an empty cart; a value that is not a JSON list is
/// logged and also counts as zero.
pub fn cart_count(storage: &LocalStorage, key: &str) -> usize {
    let Some(raw) = storage.get(key) else {
        return 0;
    };
    match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
        Ok(items) => items.len(),
        Err(err) => {
            tracing::warn!(key, error = %err, "Stored cart is not a list; showing 0");
            0
        }
    }
}

/// Reads the badge count from the store file at `path`.
///
/// Never fails: an unreadable or corrupt store is logged and yields zero.
pub fn read_cart_count(path: &Path, key: &str) -> usize {
    match LocalStorage::load(path) {
        Ok(storage) => cart_count(&storage, key),
        Err(err) => {
            tracing::warn!(error = %err, "Cart storage unavailable; showing 0");
            0
        }
    }
}

//! File-backed key/value store.
//!
//! Holds string values under string keys in a single JSON object on disk.
//! Every write persists the whole object. There is no versioning, no expiry
//! and no coordination between processes sharing the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read store '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

struct Inner {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

/// Shared handle to the store. Clones see the same items.
#[derive(Clone)]
pub struct LocalStore {
    inner: Arc<Mutex<Inner>>,
}

impl LocalStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// strings is logged and treated as empty; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "discarding unreadable store");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(StorageError::Read { path, source: err });
            }
        };

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner { path, items })),
        })
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.inner.lock().items.get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        let mut inner = self.inner.lock();
        inner.items.insert(key.to_string(), value.into());
        persist(&inner)
    }

    pub fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock();
        if inner.items.remove(key).is_none() {
            return Ok(());
        }
        persist(&inner)
    }

    pub fn path(&self) -> PathBuf {
        self.inner.lock().path.clone()
    }
}

fn persist(inner: &Inner) -> Result<(), StorageError> {
    let content = serde_json::to_string(&inner.items)?;
    write_file(&inner.path, &content)
}

fn write_file(path: &Path, content: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }
    fs::write(path, content).map_err(|e| StorageError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

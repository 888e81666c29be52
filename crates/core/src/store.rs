//! Key-value blob persistence for saved preferences and community data.
//!
//! The recommendation engine never reads from here; callers load a snapshot and
//! pass it in.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub const PREFERENCES_KEY: &str = "coffee-preferences";
pub const COMMUNITY_KEY: &str = "community-board";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key `{0}`")]
    InvalidKey(String),
    #[error("store io failure at `{path}`: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("could not decode stored `{key}`: {source}")]
    Decode { key: String, source: serde_json::Error },
    #[error("could not encode `{key}`: {source}")]
    Encode { key: String, source: serde_json::Error },
    #[error("store lock is poisoned")]
    Poisoned,
}

pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Returns whether a value was present.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;
}

/// One `<key>.json` file per key under `root`.
#[derive(Clone, Debug)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)
            .map_err(|source| StoreError::Io { path: self.root.clone(), source })?;

        // Write then rename so readers never observe a half-written blob.
        let staging = self.root.join(format!("{key}.json.tmp"));
        fs::write(&staging, value)
            .map_err(|source| StoreError::Io { path: staging.clone(), source })?;
        fs::rename(&staging, &path).map_err(|source| StoreError::Io { path, source })
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        validate_key(key)?;
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.remove(key).is_some())
    }
}

pub fn load_json<T: DeserializeOwned>(
    store: &dyn BlobStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Decode { key: key.to_string(), source })
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn BlobStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let encoded = serde_json::to_string_pretty(value)
        .map_err(|source| StoreError::Encode { key: key.to_string(), source })?;
    store.put(key, &encoded)
}

// Keys become file names, so path separators and dots are rejected.
fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

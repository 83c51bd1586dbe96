//! Key-value storage backends and typed JSON helpers.
//!
//! Two backends implement [`KeyValueStore`]:
//! - [`MemoryStorage`] keeps everything in a map (tests, runs without a config directory)
//! - [`FileStorage`] keeps a flat JSON object on disk, the durable local store of the desktop shell
//!
//! Records are written as JSON strings through [`read_json`] and [`write_json`].

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{StorageError, StoreError};
use crate::traits::KeyValueStore;

const APP_DIR_NAME: &str = "alf-wallet";
const STORAGE_FILE_NAME: &str = "local-storage.json";

/// Keys for which a corrupt value has already been reported in this process.
static REPORTED_CORRUPT_KEYS: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// In-memory key-value store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    data: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.data.remove(key);
    }
}

/// Key-value store persisted as one JSON object in a file.
///
/// Reads are served from memory. Writes are buffered and reach the disk on
/// [`flush`](KeyValueStore::flush), which replaces the file through a rename so a
/// crash never leaves a half-written file behind.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    data: HashMap<String, String>,
    dirty: bool,
}

impl FileStorage {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store. A file that cannot be parsed is
    /// logged and also yields an empty store; it is only replaced on the next flush.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let data = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<HashMap<String, String>>(&content) {
                Ok(data) => data,
                Err(e) => {
                    log::error!("Local storage at {} is unreadable ({}), starting empty", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No local storage at {}, starting empty", path.display());
                HashMap::new()
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        Ok(Self {
            path,
            data,
            dirty: false,
        })
    }

    /// Opens the store in the platform config directory.
    ///
    /// Returns `Ok(None)` when the platform has no config directory.
    pub fn open_default() -> Result<Option<Self>, StorageError> {
        match default_storage_path() {
            Some(path) => Self::open(path).map(Some),
            None => Ok(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if there are writes that have not been flushed yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl KeyValueStore for FileStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.data.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) {
        if self.data.remove(key).is_some() {
            self.dirty = true;
        }
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(&self.data)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;

        self.dirty = false;
        log::debug!("Flushed {} keys to {}", self.data.len(), self.path.display());
        Ok(())
    }
}

/// Location of the wallet's local storage file, if the platform has a config directory.
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(STORAGE_FILE_NAME))
}

/// Reads the JSON record stored under `key`.
///
/// Returns `Ok(None)` if the key is absent and `CorruptPersistedState` if the
/// stored string does not deserialize into `T`.
pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(json_str) = store.get_string(key) else {
        return Ok(None);
    };

    serde_json::from_str(&json_str)
        .map(Some)
        .map_err(|e| StoreError::CorruptPersistedState {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

/// Serializes `value` under `key`, replacing whatever was there, and flushes.
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json_str = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set_string(key, json_str);
    store.flush()?;
    Ok(())
}

/// Logs a warning about a corrupt value under `key`, at most once per key per process.
///
/// Returns true if this call emitted the warning.
pub fn report_corrupt_once(key: &str, error: &StoreError) -> bool {
    let mut reported = REPORTED_CORRUPT_KEYS.lock().unwrap_or_else(|e| e.into_inner());
    if !reported.insert(key.to_string()) {
        return false;
    }
    log::warn!("Discarding persisted value under '{}' and using defaults: {}", key, error);
    true
}

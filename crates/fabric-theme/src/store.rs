//! Persisted preference storage.
//!
//! A [`PreferenceStore`] is a string key/value store standing in for the
//! host's persistent storage. [`MemoryStore`] keeps values for the life of
//! the process and can simulate disabled storage; [`FileStore`] keeps them
//! in a JSON object on disk.

use fabric_common::{FabricError, FabricResult};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Host persistent key/value storage.
pub trait PreferenceStore: Send + Sync {
    /// Reads `key`.
    fn get(&self, key: &str) -> FabricResult<Option<String>>;

    /// Writes `key`.
    fn set(&self, key: &str, value: &str) -> FabricResult<()>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> FabricResult<()>;
}

/// In-process [`PreferenceStore`].
#[derive(Debug)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    available: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryStore {
    /// Creates an empty, available store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose every operation fails, like disabled host storage.
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.set_available(false);
        store
    }

    /// Enables or disables the store.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check(&self) -> FabricResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(FabricError::storage("preference storage is unavailable"))
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> FabricResult<Option<String>> {
        self.check()?;
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FabricResult<()> {
        self.check()?;
        self.values
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> FabricResult<()> {
        self.check()?;
        self.values.lock().remove(key);
        Ok(())
    }
}

/// [`PreferenceStore`] backed by a JSON object file.
///
/// The file is read once on open. Every write replaces the file through a
/// temporary file in the same directory, so readers never see a partial
/// document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> FabricResult<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                FabricError::storage_with_source(
                    format!("preference file {} is not a JSON object of strings", path.display()),
                    e,
                )
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(FabricError::storage_with_source(
                    format!("failed to read preference file {}", path.display()),
                    e,
                ))
            }
        };
        debug!(path = %path.display(), entries = values.len(), "preference store opened");
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, values: &BTreeMap<String, String>) -> FabricResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| {
            FabricError::storage_with_source(
                format!("failed to create preference directory {}", dir.display()),
                e,
            )
        })?;

        let mut file = tempfile::NamedTempFile::new_in(&dir).map_err(|e| {
            FabricError::storage_with_source("failed to create temporary preference file", e)
        })?;
        serde_json::to_writer_pretty(&mut file, values)?;
        file.write_all(b"\n")?;
        file.persist(&self.path).map_err(|e| {
            FabricError::storage_with_source(
                format!("failed to replace preference file {}", self.path.display()),
                e.error,
            )
        })?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> FabricResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> FabricResult<()> {
        let mut values = self.values.lock();
        let previous = values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write(&values) {
            // Keep memory in line with disk
            match previous {
                Some(previous) => values.insert(key.to_string(), previous),
                None => values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> FabricResult<()> {
        let mut values = self.values.lock();
        if let Some(previous) = values.remove(key) {
            if let Err(e) = self.write(&values) {
                values.insert(key.to_string(), previous);
                return Err(e);
            }
        }
        Ok(())
    }
}

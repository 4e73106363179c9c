//! Key-value storage backends.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

/// Durable string-keyed key-value storage.
///
/// The local-storage shape: reads are infallible (absent keys are `None`),
/// writes may be rejected.
pub trait StorageBackend {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, replacing any existing value.
    fn put(&mut self, key: &str, value: &str) -> EngineResult<()>;

    /// Removes the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> EngineResult<()>;
}

/// File-per-key storage under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a backend rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&mut self, key: &str, value: &str) -> EngineResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| EngineError::Storage {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        fs::write(self.path_for(key), value).map_err(|e| EngineError::Storage {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> EngineResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(EngineError::Storage {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> EngineResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> EngineResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use super::error::StorageError;

/// Persistence medium: one entry per stream, keyed by the stream name.
/// Reading an absent entry yields `Ok(None)`, which callers treat as an
/// empty stream.
pub trait Storage: Send + Sync {
    fn read(&self, stream: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, stream: &str, contents: &str) -> Result<(), StorageError>;
    fn remove(&self, stream: &str) -> Result<(), StorageError>;
}

/// Volatile in-process medium for tests and sessions that opt out of
/// durability.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, stream: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(stream).cloned())
    }

    fn write(&self, stream: &str, contents: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(stream.to_string(), contents.to_string());
        Ok(())
    }

    fn remove(&self, stream: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(stream);
        Ok(())
    }
}

/// File-backed medium: one `<dir>/<stream>.json` per stream.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, stream: &str) -> PathBuf {
        self.dir.join(format!("{stream}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, stream: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(stream);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, stream: &str, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(stream), contents)?;
        Ok(())
    }

    fn remove(&self, stream: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.entry_path(stream)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

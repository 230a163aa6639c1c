use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::services::error::StorageError;

/// Versioned name of the single slot holding the serialized collection.
/// A format change gets a new suffix so old data stays readable.
pub const STORAGE_KEY: &str = "linkshelf.entries.v1";

/// A single persisted slot holding the serialized collection.
pub trait SnapshotStorage {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    fn save(&mut self, snapshot: &str) -> Result<(), StorageError>;
}

/// Keeps the slot in memory; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StorageError> {
        self.slot = Some(snapshot.to_string());
        Ok(())
    }
}

/// Stores the slot as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, snapshot: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, snapshot)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

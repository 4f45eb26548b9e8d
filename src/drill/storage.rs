//! Persistence for the drill session
//!
//! The whole session lives in one slot addressed by a fixed key. On disk
//! the slot is a single JSON file:
//! ```text
//! {data_dir}/
//! └── {key}.json   # e.g. flashdrill-v1.json
//! ```
//!
//! Saves go through `{key}.json.tmp` and a rename, so the slot is always
//! either the old or the new record.

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use super::models::SessionState;

/// Slot key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "flashdrill-v1";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A single key/value slot holding the serialized session
pub trait StateStore {
    /// Raw persisted record, or `None` if nothing was saved yet
    fn load(&self) -> Result<Option<Value>>;

    fn save(&self, state: &SessionState) -> Result<()>;
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn load(&self) -> Result<Option<Value>> {
        (**self).load()
    }

    fn save(&self, state: &SessionState) -> Result<()> {
        (**self).save(state)
    }
}

impl<S: StateStore + ?Sized> StateStore for Box<S> {
    fn load(&self) -> Result<Option<Value>> {
        (**self).load()
    }

    fn save(&self, state: &SessionState) -> Result<()> {
        (**self).save(state)
    }
}

/// Slot backed by a JSON file in the data directory
pub struct FileStateStore {
    data_dir: PathBuf,
    key: String,
}

impl FileStateStore {
    pub fn new(data_dir: PathBuf, key: impl Into<String>) -> Self {
        Self {
            data_dir,
            key: key.into(),
        }
    }

    /// Default data directory (e.g., ~/.local/share/flashdrill)
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("flashdrill"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Path of the slot file
    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.key))
    }

    fn temp_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json.tmp", self.key))
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<Option<Value>> {
        let path = self.slot_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let value: Value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    fn save(&self, state: &SessionState) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let content = serde_json::to_string_pretty(state)?;

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, self.slot_path())?;
        Ok(())
    }
}

/// Slot kept in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    raw: RefCell<Option<String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw slot contents, which need not be valid JSON
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<Option<Value>> {
        match self.raw.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &SessionState) -> Result<()> {
        *self.raw.borrow_mut() = Some(serde_json::to_string(state)?);
        Ok(())
    }
}

//! Single-slot storage for the most recent result.
//!
//! A repository holds at most one [`StoredRecord`]; saving replaces it.
//! Every load verifies the integrity hash before handing the record out.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::record::StoredRecord;

/// Storage for the latest sealed record.
pub trait ResultRepository {
    /// Replace any existing record.
    fn save(&mut self, record: &StoredRecord) -> Result<(), StoreError>;

    /// The stored record, if any, after verifying its hash.
    fn load(&self) -> Result<Option<StoredRecord>, StoreError>;

    /// Remove the stored record. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-process repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    record: Option<StoredRecord>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultRepository for MemoryRepository {
    fn save(&mut self, record: &StoredRecord) -> Result<(), StoreError> {
        self.record = Some(record.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredRecord>, StoreError> {
        match &self.record {
            Some(r) => {
                r.verify()?;
                Ok(Some(r.clone()))
            }
            None => Ok(None),
        }
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.record = None;
        Ok(())
    }
}

/// Repository backed by one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultRepository for JsonFileRepository {
    fn save(&mut self, record: &StoredRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        tracing::info!("Saved result {} to {}", record.token, self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: StoredRecord = serde_json::from_str(&content)?;
        record.verify()?;
        tracing::debug!("Loaded result {} from {}", record.token, self.path.display());
        Ok(Some(record))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Cleared stored result at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

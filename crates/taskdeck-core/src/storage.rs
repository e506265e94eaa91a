/*
[INPUT]:  Task collection snapshots and a JSON file on disk
[OUTPUT]: PersistenceAdapter trait and atomic JSON file storage
[POS]:    Persistence layer
[UPDATE]: When changing the on-disk layout or write strategy
*/

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::task::Task;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored task data is malformed: {0}")]
    Corrupt(String),

    #[error("json encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("temporary file error: {0}")]
    TempFile(#[from] tempfile::PersistError),

    #[error("invalid storage path: {0}")]
    InvalidPath(String),
}

/// Durable storage for the whole task collection.
///
/// Synchronous and single-writer: exactly one `TaskStore` owns the
/// adapter for the lifetime of the process. Every save is a
/// whole-collection snapshot; tasks are never partially persisted.
pub trait PersistenceAdapter {
    fn load(&self) -> Result<Vec<Task>, StorageError>;
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Stores the task collection as a pretty-printed JSON array in a single
/// file. A missing file loads as an empty collection; writes go through a
/// temp file in the same directory and are persisted atomically.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceAdapter for JsonFileStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(tasks) => Ok(tasks),
            Err(err) => Err(StorageError::Corrupt(err.to_string())),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let parent_dir = self.path.parent().ok_or_else(|| {
            StorageError::InvalidPath(format!("{} has no parent directory", self.path.display()))
        })?;

        let mut temp_file = NamedTempFile::new_in(parent_dir)?;
        write_pretty(&mut temp_file, &tasks)?;
        temp_file.flush()?;
        temp_file.persist(&self.path)?;
        Ok(())
    }
}

fn write_pretty<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(value)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

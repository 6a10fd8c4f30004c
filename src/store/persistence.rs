//! JSON document backing a preference store.
//!
//! The whole record list is one pretty-printed JSON array, rewritten on
//! every mutation.

use crate::error::{LoadError, StorageError};
use crate::store::record::Record;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of reading a document from disk.
#[derive(Debug)]
pub enum DocumentLoad {
    /// No file at the location yet
    Missing,
    Loaded(Vec<Record>),
    /// File exists but is not a valid record list; left untouched
    Malformed(LoadError),
}

/// Read the document at `path`.
///
/// Only I/O failures on an existing file are errors; a malformed file is
/// reported through [`DocumentLoad::Malformed`].
pub fn load_document(path: &Path) -> Result<DocumentLoad, StorageError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DocumentLoad::Missing),
        Err(e) => return Err(StorageError::IoError(e)),
    };

    match serde_json::from_str::<Vec<Record>>(&content) {
        Ok(records) => Ok(DocumentLoad::Loaded(records)),
        Err(source) => Ok(DocumentLoad::Malformed(LoadError {
            path: path.to_path_buf(),
            source,
        })),
    }
}

/// Replace the document at `path` with `records`.
pub fn write_document(path: &Path, records: &[Record]) -> Result<(), StorageError> {
    let content = serde_json::to_string_pretty(records)?;
    std::fs::write(path, content).map_err(|source| StorageError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

use crate::document::{DocumentSnapshot, language_id_for_path};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a file into a document snapshot, deriving the language identifier
/// from the file extension.
pub fn read_snapshot(path: &Path) -> Result<DocumentSnapshot, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(DocumentSnapshot::from_text(&text, language_id_for_path(path)))
}

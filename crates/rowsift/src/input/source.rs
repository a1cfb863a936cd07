//! Input source loading and metadata.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, RowsiftError};

/// Metadata about the input data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

impl SourceMetadata {
    /// Describe contents read from `path`.
    pub fn new(path: PathBuf, contents: &[u8]) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut hasher = Sha256::new();
        hasher.update(contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            file,
            path,
            hash,
            size_bytes: contents.len() as u64,
        }
    }
}

/// Input file held in memory.
#[derive(Debug, Clone)]
pub struct InputSource {
    pub metadata: SourceMetadata,
    pub contents: Vec<u8>,
}

impl InputSource {
    /// Read a whole input file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| RowsiftError::io(path, e))?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| RowsiftError::io(path, e))?;

        Ok(Self {
            metadata: SourceMetadata::new(path.to_path_buf(), &contents),
            contents,
        })
    }
}

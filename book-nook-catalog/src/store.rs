//! Flat-file persistence for the library.
//!
//! The durable copy is a single UTF-8 file holding one pretty-printed JSON
//! array of book records. Every save is a full rewrite; there is no partial
//! update and no second writer.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::library::Library;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("I/O error writing {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Handle to the persisted library file.
#[derive(Debug, Clone)]
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the persisted library.
    ///
    /// The error distinguishes a missing/unreadable file from malformed
    /// content; callers that want the original degrade-to-empty behavior use
    /// [`load_or_empty`](Self::load_or_empty) instead.
    pub fn load(&self) -> Result<Library, StoreError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| StoreError::Io {
            path: self.path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    /// Read the persisted library, treating any failure as an empty library.
    pub fn load_or_empty(&self) -> Library {
        self.load().unwrap_or_default()
    }

    /// Serialize the full library to the file, overwriting previous content.
    ///
    /// Parent directories are created as needed. Fails only on storage I/O;
    /// serialization of in-memory records cannot fail.
    pub fn save(&self, library: &Library) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(library).map_err(|e| StoreError::Parse {
            path: self.path.display().to_string(),
            source: e,
        })?;
        std::fs::write(&self.path, json).map_err(|e| StoreError::Write {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

//! Verdicts-file persistence.
//!
//! A verdicts file is a JSON text file holding a store's `serialize()`
//! output. Loading is deliberately soft: a missing file means "no prior
//! verdicts", and an unreadable or unparsable file falls back to a fresh
//! store with a warning for the reviewer instead of an error. Saving is the
//! only operation that can fail hard, and callers are expected to surface
//! that failure as a warning while keeping the in-memory store authoritative.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::verdicts::VerdictMap;

/// Error type for verdicts-file writes.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write verdicts file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode verdicts: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result of a soft load: the store plus an optional warning to show the
/// reviewer when the file existed but could not be used.
#[derive(Debug)]
pub struct Loaded<T> {
    pub store: T,
    pub warning: Option<String>,
}

/// Load a store from `path`.
///
/// Missing file: fresh store, no warning. Read or parse failure: fresh
/// store plus a warning that changes will not be saved back losslessly.
pub fn load_store<T: Default + DeserializeOwned>(path: &Path) -> Loaded<T> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Loaded { store: T::default(), warning: None };
        }
        Err(e) => {
            return Loaded {
                store: T::default(),
                warning: Some(format!(
                    "Could not read verdicts file {}: {e}. Changes will not be saved.",
                    path.display()
                )),
            };
        }
    };

    if data.trim().is_empty() {
        return Loaded { store: T::default(), warning: None };
    }

    match serde_json::from_str(&data) {
        Ok(store) => Loaded { store, warning: None },
        Err(e) => Loaded {
            store: T::default(),
            warning: Some(format!(
                "Could not parse verdicts file {}: {e}. Changes will not be saved.",
                path.display()
            )),
        },
    }
}

/// Write a store to `path` as pretty-printed JSON.
pub fn save_store<T: Serialize>(path: &Path, store: &T) -> Result<(), StorageError> {
    let data = serde_json::to_string_pretty(store)?;
    std::fs::write(path, data)
        .map_err(|source| StorageError::Io { path: path.display().to_string(), source })
}

/// Convenience wrapper bundling a verdict map with the file it lives in.
#[derive(Debug)]
pub struct VerdictsFile {
    pub path: PathBuf,
    pub verdicts: VerdictMap,
}

impl VerdictsFile {
    /// Load the verdict map stored at `path` (softly; see [`load_store`]).
    pub fn load(path: impl Into<PathBuf>) -> Loaded<Self> {
        let path = path.into();
        let Loaded { store, warning } = load_store::<VerdictMap>(&path);
        Loaded { store: Self { path, verdicts: store }, warning }
    }

    /// Persist the current map back to its file.
    pub fn save(&self) -> Result<(), StorageError> {
        save_store(&self.path, &self.verdicts)
    }
}

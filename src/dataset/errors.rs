use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the dataset cache.
///
/// Cloneable so that every caller coalesced onto one load observes the same failure.
#[derive(Debug, Clone, Error)]
pub enum DatasetError {
    #[error("Dataset not found at {}. Place the transactions CSV there or pass its path.", .path.display())]
    NotFound {
        path: PathBuf
    },
    #[error("Dataset not loaded. Call load() first.")]
    NotReady,
    #[error("Dataset at {} could not be read: {reason}", .path.display())]
    Read {
        path: PathBuf,
        reason: String
    },
    #[error("Dataset load task failed: {0}")]
    Task(String)
}

impl DatasetError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Read {
            path: path.into(),
            reason: reason.to_string()
        }
    }
}

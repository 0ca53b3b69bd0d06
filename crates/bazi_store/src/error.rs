//! Error types for result persistence.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from sealing, saving or loading a record.
#[derive(Debug)]
#[non_exhaustive]
pub enum StoreError {
    /// Reading, writing or removing the backing file failed.
    Io(std::io::Error),
    /// The record could not be encoded or decoded as JSON.
    Serialization(serde_json::Error),
    /// The stored snapshot no longer matches its integrity hash.
    IntegrityMismatch { expected: String, actual: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "store I/O error: {e}"),
            Self::Serialization(e) => write!(f, "record serialization error: {e}"),
            Self::IntegrityMismatch { expected, actual } => write!(
                f,
                "record integrity mismatch: expected {expected}, computed {actual}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::IntegrityMismatch { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

//! Error types for shelve

use std::path::PathBuf;
use thiserror::Error;

/// Error types for shelve operations
#[derive(Debug, Error)]
pub enum ShelveError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (bad source/destination setup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error (logic checks, e.g. destination nested inside source)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A bucket directory could not be created under the destination root
    #[error("cannot create bucket directory '{}': {}", .path.display(), .cause)]
    Bucket {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    /// A single file copy failed; carries both endpoints and the cause
    #[error(
        "cannot copy '{}' to '{}': {}",
        .source_path.display(),
        .dest_path.display(),
        .cause
    )]
    Copy {
        source_path: PathBuf,
        dest_path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

impl ShelveError {
    /// Fatal errors abort the run before any file is copied
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShelveError::Config(_) | ShelveError::Validation(_)
        )
    }

    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        match self {
            ShelveError::Io(e) => e.kind() == std::io::ErrorKind::PermissionDenied,
            ShelveError::Copy { cause, .. } | ShelveError::Bucket { cause, .. } => {
                cause.kind() == std::io::ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }
}

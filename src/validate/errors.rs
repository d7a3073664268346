//! Validation errors
//!
//! These are values, not control flow: the file validator returns them, the
//! directory walker collects them, and only the command layer turns them
//! into an exit status.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::fzp::FzpError;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Per-file errors accumulated over a directory run, in listing order
pub type FailureList = Vec<ValidationError>;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// The file could not be loaded; no checks ran
    #[error("validator failed @ {0}")]
    Load(#[from] FzpError),

    /// One or more checks failed
    #[error("{count} Errors @ {}", .path.display())]
    ChecksFailed { count: usize, path: PathBuf },

    /// The directory could not be listed; no files were validated
    #[error("validator failed @ read folder '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ValidationError {
    pub(crate) fn checks_failed(count: usize, path: &Path) -> Self {
        Self::ChecksFailed {
            count,
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn read_dir(path: &Path, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Load(e) => e.code(),
            ValidationError::ChecksFailed { .. } => "FZP_CHECKS_FAILED",
            ValidationError::ReadDir { .. } => "FZP_READ_DIR_FAILED",
        }
    }

    /// The file or directory the error refers to
    pub fn path(&self) -> &Path {
        match self {
            ValidationError::Load(e) => e.path(),
            ValidationError::ChecksFailed { path, .. } | ValidationError::ReadDir { path, .. } => {
                path
            }
        }
    }

    /// Number of failed checks, zero for load and listing errors
    pub fn failure_count(&self) -> usize {
        match self {
            ValidationError::ChecksFailed { count, .. } => *count,
            _ => 0,
        }
    }
}

//! Record loader errors
//!
//! Every loader error is terminal for the file it concerns: no checks run
//! against a record that failed to load.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for loader operations
pub type FzpResult<T> = Result<T, FzpError>;

/// Errors produced while turning a file into an [`Fzp`](super::Fzp) record
#[derive(Debug, Error)]
pub enum FzpError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed fzp '{}': {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("'{}' is not an fzp module (root element: {found})", .path.display())]
    NotAModule { path: PathBuf, found: String },
}

impl FzpError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_a_module(path: &Path, found: impl Into<String>) -> Self {
        Self::NotAModule {
            path: path.to_path_buf(),
            found: found.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            FzpError::Read { .. } => "FZP_READ_FAILED",
            FzpError::Malformed { .. } => "FZP_MALFORMED",
            FzpError::NotAModule { .. } => "FZP_NOT_A_MODULE",
        }
    }

    /// Path of the file that failed to load
    pub fn path(&self) -> &Path {
        match self {
            FzpError::Read { path, .. }
            | FzpError::Malformed { path, .. }
            | FzpError::NotAModule { path, .. } => path,
        }
    }
}

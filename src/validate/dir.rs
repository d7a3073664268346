//! Directory walker
//!
//! Validates every `.fzp` file directly inside a directory. Entries are
//! visited in file-name order; subdirectories and other extensions are
//! skipped. One bad file never stops the walk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::fzp::{RecordLoader, FZP_EXTENSION};
use crate::observability::Logger;

use super::errors::{FailureList, ValidationError, ValidationResult};
use super::file::FileValidator;

/// Whether `path` names a candidate part file (exact, case-sensitive extension).
pub fn is_fzp_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == FZP_EXTENSION)
}

/// Walks one directory level.
#[derive(Debug, Clone)]
pub struct DirectoryWalker {
    dir: PathBuf,
}

impl DirectoryWalker {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Candidate files, sorted by file name.
    ///
    /// Fails as a whole if the directory or any of its entries cannot be read.
    pub fn candidates(&self) -> ValidationResult<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| ValidationError::read_dir(&self.dir, e))?;

        let mut entries = entries
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ValidationError::read_dir(&self.dir, e))?;
        entries.sort_by_key(|entry| entry.file_name());

        Ok(entries
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| !path.is_dir() && is_fzp_file(path))
            .collect())
    }

    /// Calls `visit` on every candidate file and collects the errors it
    /// returns. A listing failure is the only entry in the result.
    pub fn walk<F>(&self, mut visit: F) -> FailureList
    where
        F: FnMut(&Path) -> ValidationResult<()>,
    {
        let candidates = match self.candidates() {
            Ok(candidates) => candidates,
            Err(e) => return vec![e],
        };

        candidates
            .iter()
            .filter_map(|path| visit(path.as_path()).err())
            .collect()
    }

    /// Runs `validator` on every candidate file, printing each error
    /// followed by a blank line as it occurs.
    pub fn validate_all<L: RecordLoader, W: Write>(
        &self,
        validator: &FileValidator<'_, L>,
        log: &mut Logger<W>,
    ) -> FailureList {
        let display = self.dir.display().to_string();
        log.trace("DIR_READ", &[("path", &display)]);

        let failures = self.walk(|path| {
            validator.validate(path, log).map(|_| ()).map_err(|err| {
                log.report(&err);
                log.blank();
                err
            })
        });

        if let [err @ ValidationError::ReadDir { .. }] = failures.as_slice() {
            log.error("DIR_READ_FAILED", &[("path", &display), ("code", err.code())]);
            log.report(err);
        }

        failures
    }
}

//! File validator
//!
//! Loads one record and runs the check pipeline over it. Check failures are
//! written as they are found, before the file is classified.

use std::io::Write;
use std::path::Path;

use crate::checks::{CheckConfig, CheckPipeline, CheckReport};
use crate::fzp::{FzpLoader, RecordLoader};
use crate::observability::Logger;

use super::errors::{ValidationError, ValidationResult};

/// Validates single files with a given loader and configuration.
pub struct FileValidator<'a, L: RecordLoader = FzpLoader> {
    loader: L,
    config: &'a CheckConfig,
}

impl<'a> FileValidator<'a, FzpLoader> {
    /// Validator reading `.fzp` files from disk
    pub fn new(config: &'a CheckConfig) -> Self {
        Self::with_loader(FzpLoader::new(), config)
    }
}

impl<'a, L: RecordLoader> FileValidator<'a, L> {
    pub fn with_loader(loader: L, config: &'a CheckConfig) -> Self {
        Self { loader, config }
    }

    /// Validates the file at `path`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::Load` if the file cannot be loaded (no checks run)
    /// - `ValidationError::ChecksFailed` if any enabled check failed
    pub fn validate<W: Write>(
        &self,
        path: &Path,
        log: &mut Logger<W>,
    ) -> ValidationResult<CheckReport> {
        let record = self.loader.load(path)?;

        let display = path.display().to_string();
        log.trace("FZP_READ", &[("path", &display)]);

        let report = CheckPipeline::new(self.config).run(&record, |failure| {
            log.report(format_args!("=> {}", failure));
        });

        if !report.is_valid() {
            return Err(ValidationError::checks_failed(report.failure_count(), path));
        }

        log.info("FZP_VALID", &[("path", &display)]);
        Ok(report)
    }
}

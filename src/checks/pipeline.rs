//! Check pipeline
//!
//! Runs the enabled wired checks against one record in a fixed order:
//! module-id, title, properties. Checks are independent; a failure never
//! stops the remaining checks.

use crate::fzp::Fzp;

use super::{run_check, CheckConfig, CheckFailure, CheckKind};

/// Checks the pipeline runs, in execution order
const WIRED: [CheckKind; 3] = [CheckKind::ModuleId, CheckKind::Title, CheckKind::Properties];

/// Result of running the pipeline over one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    checks_run: usize,
    failures: Vec<CheckFailure>,
}

impl CheckReport {
    /// Number of checks that actually ran (disabled checks excluded)
    pub fn checks_run(&self) -> usize {
        self.checks_run
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Failures in the order they were found
    pub fn failures(&self) -> &[CheckFailure] {
        &self.failures
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Ordered, configurable set of checks.
pub struct CheckPipeline<'a> {
    config: &'a CheckConfig,
}

impl<'a> CheckPipeline<'a> {
    pub fn new(config: &'a CheckConfig) -> Self {
        Self { config }
    }

    /// The wired checks, in execution order
    pub fn wired() -> &'static [CheckKind] {
        &WIRED
    }

    /// Runs every enabled check, handing each failure to `on_failure` as
    /// soon as it is found.
    pub fn run<F>(&self, record: &Fzp, mut on_failure: F) -> CheckReport
    where
        F: FnMut(&CheckFailure),
    {
        let mut report = CheckReport::default();

        for kind in WIRED {
            if !self.config.is_enabled(kind) {
                continue;
            }

            report.checks_run += 1;
            if let Err(failure) = run_check(kind, record, self.config.property_policy()) {
                on_failure(&failure);
                report.failures.push(failure);
            }
        }

        report
    }
}

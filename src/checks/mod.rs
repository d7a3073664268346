//! Field checks and the check pipeline
//!
//! Every configurable check has a [`CheckKind`]. Only module-id, title and
//! properties are enforced; the remaining kinds are accepted by the
//! configuration but always pass.

mod config;
mod fields;
mod pipeline;

pub use config::{CheckConfig, PropertyPolicy};
pub use fields::{
    check_buses, check_connectors, check_description, check_family, check_fritzing_version,
    check_module_id, check_properties, check_reference_file, check_tags, check_title,
    check_version, check_views, run_check,
};
pub use pipeline::{CheckPipeline, CheckReport};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a single field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    FritzingVersion,
    ModuleId,
    ReferenceFile,
    Version,
    Title,
    Description,
    Family,
    Tags,
    Properties,
    Views,
    Connectors,
    Buses,
}

impl CheckKind {
    /// All kinds, in command-line option order
    pub const ALL: [CheckKind; 12] = [
        CheckKind::FritzingVersion,
        CheckKind::ModuleId,
        CheckKind::ReferenceFile,
        CheckKind::Version,
        CheckKind::Title,
        CheckKind::Description,
        CheckKind::Family,
        CheckKind::Tags,
        CheckKind::Properties,
        CheckKind::Views,
        CheckKind::Connectors,
        CheckKind::Buses,
    ];

    /// Lowercase identifier used in flags and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::FritzingVersion => "fritzingversion",
            CheckKind::ModuleId => "moduleid",
            CheckKind::ReferenceFile => "referencefile",
            CheckKind::Version => "version",
            CheckKind::Title => "title",
            CheckKind::Description => "description",
            CheckKind::Family => "family",
            CheckKind::Tags => "tags",
            CheckKind::Properties => "properties",
            CheckKind::Views => "views",
            CheckKind::Connectors => "connectors",
            CheckKind::Buses => "buses",
        }
    }

    /// Name of the command-line flag that disables this check
    pub fn disable_flag(&self) -> String {
        format!("no-check-{}", self.as_str())
    }

    /// Whether the pipeline actually runs this check
    pub fn is_enforced(&self) -> bool {
        CheckPipeline::wired().contains(self)
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed check with its human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    kind: CheckKind,
    reason: String,
}

impl CheckFailure {
    pub fn new(kind: CheckKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }

    /// The check that failed
    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    /// Why it failed
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

/// Outcome of running a single check
pub type CheckOutcome = Result<(), CheckFailure>;

//! Check configuration
//!
//! Built once at startup from flags (and optionally a config file), then
//! only read. Every check is enabled unless explicitly disabled.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::CheckKind;

/// How strictly the properties check treats individual entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyPolicy {
    /// Only require at least one property
    #[default]
    Lenient,
    /// Additionally require a non-empty name and value on every property
    Strict,
}

/// Which checks run, and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    disabled: BTreeSet<CheckKind>,
    property_policy: PropertyPolicy,
}

impl CheckConfig {
    /// All checks enabled, lenient property policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable a check. Disabling twice is a no-op.
    pub fn disable(&mut self, kind: CheckKind) -> &mut Self {
        self.disabled.insert(kind);
        self
    }

    /// Builder form of [`disable`](Self::disable)
    pub fn without(mut self, kind: CheckKind) -> Self {
        self.disable(kind);
        self
    }

    pub fn set_property_policy(&mut self, policy: PropertyPolicy) -> &mut Self {
        self.property_policy = policy;
        self
    }

    /// Builder form of [`set_property_policy`](Self::set_property_policy)
    pub fn with_property_policy(mut self, policy: PropertyPolicy) -> Self {
        self.property_policy = policy;
        self
    }

    /// Returns true unless the check's `no-check-*` flag was set
    pub fn is_enabled(&self, kind: CheckKind) -> bool {
        !self.disabled.contains(&kind)
    }

    pub fn property_policy(&self) -> PropertyPolicy {
        self.property_policy
    }

    /// Disabled checks, in option order
    pub fn disabled(&self) -> impl Iterator<Item = CheckKind> + '_ {
        self.disabled.iter().copied()
    }
}

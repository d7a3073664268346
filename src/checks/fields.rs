//! Field checks
//!
//! Each check inspects one field of a record and never mutates it.
//! A module id or title is missing only when it is absent or the empty
//! string; whitespace is content. The strict property policy is stricter
//! and treats whitespace-only names and values as missing.

use crate::fzp::{Fzp, Property};

use super::{CheckFailure, CheckKind, CheckOutcome, PropertyPolicy};

fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Fails if the `moduleId` attribute is absent or empty.
pub fn check_module_id(record: &Fzp) -> CheckOutcome {
    if is_empty(record.module_id.as_deref()) {
        return Err(CheckFailure::new(CheckKind::ModuleId, "moduleId undefined"));
    }
    Ok(())
}

/// Fails if `<title>` is absent or empty.
pub fn check_title(record: &Fzp) -> CheckOutcome {
    if is_empty(record.title.as_deref()) {
        return Err(CheckFailure::new(CheckKind::Title, "title undefined"));
    }
    Ok(())
}

/// Fails if there are no properties. Under [`PropertyPolicy::Strict`] the
/// first property missing a name or a value fails the check as well.
pub fn check_properties(record: &Fzp, policy: PropertyPolicy) -> CheckOutcome {
    if record.properties.is_empty() {
        return Err(CheckFailure::new(CheckKind::Properties, "properties undefined"));
    }

    if policy == PropertyPolicy::Strict {
        for (index, property) in record.properties.iter().enumerate() {
            check_property_entry(index, property)?;
        }
    }

    Ok(())
}

fn check_property_entry(index: usize, property: &Property) -> CheckOutcome {
    let name = match property.name.as_deref() {
        Some(name) if !is_blank(Some(name)) => name,
        _ => {
            return Err(CheckFailure::new(
                CheckKind::Properties,
                format!("property #{} has no name", index),
            ))
        }
    };

    if is_blank(property.value.as_deref()) {
        return Err(CheckFailure::new(
            CheckKind::Properties,
            format!("property '{}' has no value", name),
        ));
    }

    Ok(())
}

// Declared but not enforced. These always pass.

pub fn check_fritzing_version(_record: &Fzp) -> CheckOutcome {
    Ok(())
}

pub fn check_reference_file(_record: &Fzp) -> CheckOutcome {
    Ok(())
}

pub fn check_version(_record: &Fzp) -> CheckOutcome {
    Ok(())
}

pub fn check_description(_record: &Fzp) -> CheckOutcome {
    Ok(())
}

pub fn check_family(_record: &Fzp) -> CheckOutcome {
    Ok(())
}

pub fn check_tags(_record: &Fzp) -> CheckOutcome {
    Ok(())
}

pub fn check_views(_record: &Fzp) -> CheckOutcome {
    Ok(())
}

pub fn check_connectors(_record: &Fzp) -> CheckOutcome {
    Ok(())
}

pub fn check_buses(_record: &Fzp) -> CheckOutcome {
    Ok(())
}

/// Runs the check identified by `kind`.
pub fn run_check(kind: CheckKind, record: &Fzp, policy: PropertyPolicy) -> CheckOutcome {
    match kind {
        CheckKind::FritzingVersion => check_fritzing_version(record),
        CheckKind::ModuleId => check_module_id(record),
        CheckKind::ReferenceFile => check_reference_file(record),
        CheckKind::Version => check_version(record),
        CheckKind::Title => check_title(record),
        CheckKind::Description => check_description(record),
        CheckKind::Family => check_family(record),
        CheckKind::Tags => check_tags(record),
        CheckKind::Properties => check_properties(record, policy),
        CheckKind::Views => check_views(record),
        CheckKind::Connectors => check_connectors(record),
        CheckKind::Buses => check_buses(record),
    }
}

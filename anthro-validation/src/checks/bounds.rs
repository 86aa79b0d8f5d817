//! Required-field and base-value bounds checks — the two short-circuit
//! gates that keep downstream ratio math away from garbage values.

use std::str::FromStr;

use anthro_core::constants::{
    AGE_MAX_YEARS, HEIGHT_MAX_CM, PENALTY_BASE_BOUND, PENALTY_MISSING_FIELD, WEIGHT_MAX_KG,
};
use anthro_core::{Record, Sex};

use crate::checks::Findings;

/// The four required fields, present but not yet range-checked.
#[derive(Debug, Clone)]
pub struct RequiredFields<'a> {
    pub age: i64,
    pub sex: &'a str,
    pub height: f64,
    pub weight: f64,
}

/// Base measurements that passed the bounds gate.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub age: i64,
    pub sex: Sex,
    pub height: f64,
    pub weight: f64,
}

/// Check that every required field is present.
///
/// Appends one finding per missing field and returns `None` when any is
/// absent: an incomplete record cannot be meaningfully cross-validated.
pub fn required<'a>(record: &'a Record, findings: &mut Findings) -> Option<RequiredFields<'a>> {
    let mut missing = Vec::new();
    if record.age.is_none() {
        missing.push("age");
    }
    if record.sex.is_none() {
        missing.push("sex");
    }
    if record.height.is_none() {
        missing.push("height");
    }
    if record.weight.is_none() {
        missing.push("weight");
    }

    for name in &missing {
        findings.error(
            format!("missing required field: {name}"),
            PENALTY_MISSING_FIELD,
        );
    }
    if !missing.is_empty() {
        return None;
    }

    Some(RequiredFields {
        age: record.age?,
        sex: record.sex.as_deref()?,
        height: record.height?,
        weight: record.weight?,
    })
}

/// Check the four base values against their plausibility bounds.
///
/// All four are always evaluated, even after a failure, so the caller gets
/// every bounds finding at once. Returns the parsed profile only when all
/// pass; the engine short-circuits on `None`.
pub fn base(fields: &RequiredFields<'_>, findings: &mut Findings) -> Option<Profile> {
    let mut ok = true;

    if fields.age < 0 || fields.age > AGE_MAX_YEARS {
        findings.error(
            format!(
                "age out of range: {} years (expected 0-{AGE_MAX_YEARS})",
                fields.age
            ),
            PENALTY_BASE_BOUND,
        );
        ok = false;
    }

    let sex = match Sex::from_str(fields.sex) {
        Ok(sex) => Some(sex),
        Err(err) => {
            findings.error(err.to_string(), PENALTY_BASE_BOUND);
            ok = false;
            None
        }
    };

    if fields.height <= 0.0 || fields.height > HEIGHT_MAX_CM {
        findings.error(
            format!(
                "height out of range: {} cm (expected 0-{HEIGHT_MAX_CM})",
                fields.height
            ),
            PENALTY_BASE_BOUND,
        );
        ok = false;
    }

    if fields.weight <= 0.0 || fields.weight > WEIGHT_MAX_KG {
        findings.error(
            format!(
                "weight out of range: {} kg (expected 0-{WEIGHT_MAX_KG})",
                fields.weight
            ),
            PENALTY_BASE_BOUND,
        );
        ok = false;
    }

    if !ok {
        return None;
    }
    sex.map(|sex| Profile {
        age: fields.age,
        sex,
        height: fields.height,
        weight: fields.weight,
    })
}

//! Weight-related checks: BMI banding, adult weight-for-height, and the
//! child weight-for-age estimate.
//!
//! The BMI warning band and the adult weight band overlap in places; they
//! are distinct rules and both can fire for the same record.

use anthro_core::constants::{
    ADOLESCENT_REFERENCE_BMI, ADULT_AGE_YEARS, ADULT_BMI_MAX, ADULT_BMI_MIN,
    ADULT_WEIGHT_MARGIN_HIGH, ADULT_WEIGHT_MARGIN_LOW, BMI_EXTREME_HIGH, BMI_EXTREME_LOW,
    BMI_UNUSUAL_HIGH, BMI_UNUSUAL_LOW, CHILD_WEIGHT_MAX_DEVIATION, PENALTY_ADULT_WEIGHT,
    PENALTY_BMI_EXTREME, PENALTY_BMI_UNUSUAL, PENALTY_CHILD_WEIGHT,
};

use crate::checks::bounds::Profile;
use crate::checks::Findings;

/// Body mass index: weight in kg over squared height in meters.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    weight_kg / (height_cm / 100.0).powi(2)
}

/// BMI banding: extreme values are hard errors, unusual values soft
/// warnings. The bands are mutually exclusive — a value outside the
/// extreme band never also warns.
pub fn check_bmi(profile: &Profile, findings: &mut Findings) {
    let bmi = bmi(profile.weight, profile.height);
    if bmi < BMI_EXTREME_LOW || bmi > BMI_EXTREME_HIGH {
        findings.error(
            format!(
                "extreme BMI: {bmi:.1} ({} kg at {} cm)",
                profile.weight, profile.height
            ),
            PENALTY_BMI_EXTREME,
        );
    } else if bmi < BMI_UNUSUAL_LOW || bmi > BMI_UNUSUAL_HIGH {
        findings.warning(
            format!("unusual BMI: {bmi:.1}, check weight and height"),
            PENALTY_BMI_UNUSUAL,
        );
    }
}

/// Adult weight-for-height: weight must sit within margin of the band
/// derived from BMI 16 and BMI 35 at the record's height. Adults only.
pub fn check_adult_weight(profile: &Profile, findings: &mut Findings) {
    if profile.age < ADULT_AGE_YEARS {
        return;
    }
    let height_m_sq = (profile.height / 100.0).powi(2);
    let weight_min = ADULT_BMI_MIN * height_m_sq;
    let weight_max = ADULT_BMI_MAX * height_m_sq;
    if profile.weight < weight_min * ADULT_WEIGHT_MARGIN_LOW
        || profile.weight > weight_max * ADULT_WEIGHT_MARGIN_HIGH
    {
        findings.error(
            format!(
                "implausible weight for an adult of {} cm: {} kg (expected {weight_min:.0}-{weight_max:.0} kg)",
                profile.height, profile.weight
            ),
            PENALTY_ADULT_WEIGHT,
        );
    }
}

/// Child weight-for-age: warn when weight deviates more than 50% from the
/// piecewise estimate. Minors only.
pub fn check_child_weight(profile: &Profile, findings: &mut Findings) {
    if profile.age >= ADULT_AGE_YEARS {
        return;
    }
    let expected = estimate_child_weight(profile.age, profile.height);
    let deviation = (profile.weight - expected).abs() / expected;
    if deviation > CHILD_WEIGHT_MAX_DEVIATION {
        findings.warning(
            format!(
                "unusual weight for age and height: {} kg (expected around {expected:.0} kg)",
                profile.weight
            ),
            PENALTY_CHILD_WEIGHT,
        );
    }
}

/// Piecewise child weight estimate in kg, sex-independent.
///
/// Infants: `3·age + 7`; children: `2·age + 8`; adolescents: weight at a
/// reference BMI of 19 for the given height. Always returns a value on the
/// bounds-checked input domain.
pub fn estimate_child_weight(age: i64, height_cm: f64) -> f64 {
    if age < 2 {
        3.0 * age as f64 + 7.0
    } else if age < 12 {
        2.0 * age as f64 + 8.0
    } else {
        ADOLESCENT_REFERENCE_BMI * (height_cm / 100.0).powi(2)
    }
}

//! Body-ratio checks against the ratio table, plus cross-measurement
//! contradictions between supplied optional measurements.

use anthro_core::constants::{
    PENALTY_CROSS_MEASUREMENT, PENALTY_RATIO, PENALTY_SPAN_ATYPICAL, SPAN_RATIO_TOLERANCE,
};
use anthro_core::reference::RatioTable;
use anthro_core::Record;

use crate::checks::bounds::Profile;
use crate::checks::Findings;

/// A measurement counts as supplied only when present and non-zero.
fn supplied(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Check each supplied measurement's ratio to height against its
/// reference range.
///
/// The span ratio carries an absolute tolerance band: beyond it the
/// violation is a hard error, within it only a warning. The other ratios
/// have no such band.
pub fn check_ratios(
    record: &Record,
    profile: &Profile,
    table: &RatioTable,
    findings: &mut Findings,
) {
    if let Some(waist) = supplied(record.waist_circumference) {
        let ratio = waist / profile.height;
        let range = table.waist_to_height;
        if !range.contains(ratio) {
            findings.error(
                format!(
                    "waist-to-height ratio out of range: {ratio:.2} (expected {:.2}-{:.2})",
                    range.min, range.max
                ),
                PENALTY_RATIO,
            );
        }
    }

    if let Some(span) = supplied(record.arm_span) {
        let ratio = span / profile.height;
        let range = table.span_to_height;
        if ratio < range.min - SPAN_RATIO_TOLERANCE || ratio > range.max + SPAN_RATIO_TOLERANCE {
            findings.error(
                format!(
                    "span-to-height ratio out of range: {ratio:.2} (expected {:.2}-{:.2})",
                    range.min, range.max
                ),
                PENALTY_RATIO,
            );
        } else if !range.contains(ratio) {
            findings.warning(
                format!(
                    "arm span slightly atypical: {span} cm at height {} cm",
                    profile.height
                ),
                PENALTY_SPAN_ATYPICAL,
            );
        }
    }

    if let Some(leg) = supplied(record.leg_length) {
        let ratio = leg / profile.height;
        let range = table.leg_to_height;
        if !range.contains(ratio) {
            findings.error(
                format!(
                    "leg-to-height ratio out of range: {ratio:.2} (expected {:.2}-{:.2})",
                    range.min, range.max
                ),
                PENALTY_RATIO,
            );
        }
    }
}

/// Contradictions between pairs of supplied measurements: the waist
/// circumference and the leg length can never exceed the arm span.
pub fn check_cross(record: &Record, findings: &mut Findings) {
    let waist = supplied(record.waist_circumference);
    let span = supplied(record.arm_span);
    let leg = supplied(record.leg_length);

    if let (Some(waist), Some(span)) = (waist, span) {
        if waist > span {
            findings.error(
                format!("waist circumference ({waist} cm) exceeds arm span ({span} cm)"),
                PENALTY_CROSS_MEASUREMENT,
            );
        }
    }

    if let (Some(leg), Some(span)) = (leg, span) {
        if leg > span {
            findings.error(
                format!("leg length ({leg} cm) exceeds arm span ({span} cm)"),
                PENALTY_CROSS_MEASUREMENT,
            );
        }
    }
}

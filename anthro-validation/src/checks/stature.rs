//! Height-for-age plausibility against the per-sex reference table.

use anthro_core::constants::PENALTY_HEIGHT_RANGE;
use anthro_core::reference::HeightRangeTable;

use crate::checks::bounds::Profile;
use crate::checks::Findings;

/// Compare height against the reference range for the profile's sex and
/// age. Ages outside the table's coverage are skipped without penalty.
pub fn check(profile: &Profile, table: &HeightRangeTable, findings: &mut Findings) {
    let Some((min_cm, max_cm)) = table.lookup(profile.sex, profile.age) else {
        return;
    };
    if profile.height < min_cm || profile.height > max_cm {
        findings.error(
            format!(
                "height inconsistent for a {}-year-old {}: {} cm (expected {min_cm}-{max_cm} cm)",
                profile.age, profile.sex, profile.height
            ),
            PENALTY_HEIGHT_RANGE,
        );
    }
}

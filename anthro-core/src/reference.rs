//! Static anthropometric reference tables.
//!
//! Height ranges are keyed by sex and a half-open age interval. Interval
//! containment requires scanning, not exact-key lookup, so each table is an
//! ordered list of (interval, range) entries checked linearly — the tables
//! are tiny and fixed for the process lifetime.

use serde::{Deserialize, Serialize};

use crate::constants::HEIGHT_TABLE_AGE_COVER;
use crate::errors::{AnthroError, AnthroResult};
use crate::record::Sex;

/// One height-range entry: a half-open age interval `[age_min, age_max)`
/// and the plausible standing-height range within it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightRangeEntry {
    pub age_min: i64,
    pub age_max: i64,
    pub min_height_cm: f64,
    pub max_height_cm: f64,
}

fn entry(age_min: i64, age_max: i64, min_height_cm: f64, max_height_cm: f64) -> HeightRangeEntry {
    HeightRangeEntry {
        age_min,
        age_max,
        min_height_cm,
        max_height_cm,
    }
}

/// Per-sex height-for-age reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightRangeTable {
    pub male: Vec<HeightRangeEntry>,
    pub female: Vec<HeightRangeEntry>,
}

impl HeightRangeTable {
    /// First interval containing `age`, scanned in order.
    ///
    /// `None` when no interval matches; callers skip the stature check
    /// without penalty in that case.
    pub fn lookup(&self, sex: Sex, age: i64) -> Option<(f64, f64)> {
        let entries = match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        };
        entries
            .iter()
            .find(|e| e.age_min <= age && age < e.age_max)
            .map(|e| (e.min_height_cm, e.max_height_cm))
    }

    /// Verify the interval invariant for both sexes: ascending,
    /// non-overlapping, collectively covering `[0, 150)`.
    pub fn validate(&self) -> AnthroResult<()> {
        validate_entries(Sex::Male, &self.male)?;
        validate_entries(Sex::Female, &self.female)
    }
}

fn validate_entries(sex: Sex, entries: &[HeightRangeEntry]) -> AnthroResult<()> {
    let invalid = |reason: String| AnthroError::InvalidHeightTable { sex, reason };

    if entries.is_empty() {
        return Err(invalid("table is empty".to_string()));
    }

    let mut prev_max = 0;
    for e in entries {
        if e.age_min != prev_max {
            return Err(invalid(format!(
                "interval [{}, {}) does not start where the previous one ended ({prev_max})",
                e.age_min, e.age_max
            )));
        }
        if e.age_max <= e.age_min {
            return Err(invalid(format!(
                "empty age interval [{}, {})",
                e.age_min, e.age_max
            )));
        }
        if e.min_height_cm <= 0.0 || e.max_height_cm < e.min_height_cm {
            return Err(invalid(format!(
                "invalid height range {}-{} cm for ages [{}, {})",
                e.min_height_cm, e.max_height_cm, e.age_min, e.age_max
            )));
        }
        prev_max = e.age_max;
    }

    if prev_max != HEIGHT_TABLE_AGE_COVER {
        return Err(invalid(format!(
            "coverage must extend to age {HEIGHT_TABLE_AGE_COVER}, ends at {prev_max}"
        )));
    }

    Ok(())
}

impl Default for HeightRangeTable {
    fn default() -> Self {
        Self {
            male: vec![
                entry(0, 2, 50.0, 90.0),
                entry(2, 5, 85.0, 115.0),
                entry(5, 10, 105.0, 145.0),
                entry(10, 15, 130.0, 180.0),
                entry(15, 20, 155.0, 200.0),
                entry(20, 150, 150.0, 210.0),
            ],
            female: vec![
                entry(0, 2, 48.0, 88.0),
                entry(2, 5, 83.0, 112.0),
                entry(5, 10, 103.0, 142.0),
                entry(10, 15, 130.0, 175.0),
                entry(15, 20, 150.0, 185.0),
                entry(20, 150, 145.0, 195.0),
            ],
        }
    }
}

/// Reference range for one body-measurement ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioRange {
    pub min: f64,
    pub max: f64,
}

impl RatioRange {
    /// Inclusive containment on both ends.
    pub fn contains(&self, ratio: f64) -> bool {
        self.min <= ratio && ratio <= self.max
    }
}

/// Reference ranges for the three supported body ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioTable {
    /// Waist circumference over height.
    pub waist_to_height: RatioRange,
    /// Arm span over height.
    pub span_to_height: RatioRange,
    /// Leg length over height.
    pub leg_to_height: RatioRange,
}

impl RatioTable {
    /// Verify every range has `0 < min ≤ max`.
    pub fn validate(&self) -> AnthroResult<()> {
        for (name, range) in [
            ("waist_to_height", self.waist_to_height),
            ("span_to_height", self.span_to_height),
            ("leg_to_height", self.leg_to_height),
        ] {
            if range.min <= 0.0 || range.max < range.min {
                return Err(AnthroError::InvalidRatioRange {
                    ratio: name,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

impl Default for RatioTable {
    fn default() -> Self {
        Self {
            waist_to_height: RatioRange {
                min: 0.35,
                max: 0.55,
            },
            span_to_height: RatioRange {
                min: 0.98,
                max: 1.06,
            },
            leg_to_height: RatioRange {
                min: 0.45,
                max: 0.53,
            },
        }
    }
}

/// The full set of reference tables a checker consults.
///
/// Read-only after construction; the checker never mutates them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub heights: HeightRangeTable,
    pub ratios: RatioTable,
}

impl ReferenceTables {
    /// Verify all table invariants.
    pub fn validate(&self) -> AnthroResult<()> {
        self.heights.validate()?;
        self.ratios.validate()
    }
}

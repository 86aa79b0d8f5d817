//! Tests for the reference tables: lookup semantics and invariants.

use anthro_core::reference::HeightRangeEntry;
use anthro_core::{AnthroError, HeightRangeTable, RatioRange, RatioTable, ReferenceTables, Sex};

fn entry(age_min: i64, age_max: i64, min_height_cm: f64, max_height_cm: f64) -> HeightRangeEntry {
    HeightRangeEntry {
        age_min,
        age_max,
        min_height_cm,
        max_height_cm,
    }
}

// ─── Height-range lookup ─────────────────────────────────────────────────────

#[test]
fn lookup_uses_half_open_intervals() {
    let table = HeightRangeTable::default();
    // Age 2 belongs to [2, 5), not [0, 2).
    assert_eq!(table.lookup(Sex::Male, 2), Some((85.0, 115.0)));
    assert_eq!(table.lookup(Sex::Male, 0), Some((50.0, 90.0)));
    assert_eq!(table.lookup(Sex::Female, 19), Some((150.0, 185.0)));
    assert_eq!(table.lookup(Sex::Female, 20), Some((145.0, 195.0)));
}

#[test]
fn lookup_returns_none_outside_coverage() {
    let table = HeightRangeTable::default();
    assert_eq!(table.lookup(Sex::Male, 150), None);
    assert_eq!(table.lookup(Sex::Female, 150), None);
    assert_eq!(table.lookup(Sex::Male, 149), Some((150.0, 210.0)));
}

#[test]
fn default_tables_are_valid() {
    ReferenceTables::default().validate().unwrap();
}

// ─── Height-table invariants ─────────────────────────────────────────────────

#[test]
fn table_with_gap_is_rejected() {
    let table = HeightRangeTable {
        male: vec![entry(0, 10, 50.0, 145.0), entry(12, 150, 130.0, 210.0)],
        female: HeightRangeTable::default().female,
    };
    let err = table.validate().unwrap_err();
    assert!(matches!(
        err,
        AnthroError::InvalidHeightTable { sex: Sex::Male, .. }
    ));
}

#[test]
fn table_not_covering_to_150_is_rejected() {
    let table = HeightRangeTable {
        male: HeightRangeTable::default().male,
        female: vec![entry(0, 20, 48.0, 185.0)],
    };
    let err = table.validate().unwrap_err();
    assert!(err.to_string().contains("female"));
    assert!(err.to_string().contains("150"));
}

#[test]
fn empty_table_is_rejected() {
    let table = HeightRangeTable {
        male: vec![],
        female: HeightRangeTable::default().female,
    };
    assert!(table.validate().is_err());
}

#[test]
fn inverted_height_range_is_rejected() {
    let table = HeightRangeTable {
        male: vec![entry(0, 150, 210.0, 150.0)],
        female: HeightRangeTable::default().female,
    };
    assert!(table.validate().is_err());
}

// ─── Ratio table ─────────────────────────────────────────────────────────────

#[test]
fn ratio_range_containment_is_inclusive() {
    let range = RatioRange {
        min: 0.35,
        max: 0.55,
    };
    assert!(range.contains(0.35));
    assert!(range.contains(0.55));
    assert!(!range.contains(0.349));
    assert!(!range.contains(0.551));
}

#[test]
fn inverted_ratio_range_is_rejected() {
    let table = RatioTable {
        waist_to_height: RatioRange {
            min: 0.55,
            max: 0.35,
        },
        ..Default::default()
    };
    let err = table.validate().unwrap_err();
    assert!(matches!(
        err,
        AnthroError::InvalidRatioRange {
            ratio: "waist_to_height",
            ..
        }
    ));
}

//! ConsistencyChecker — sequences the rule families over a record,
//! accumulates findings, and derives the coherence score.

use tracing::debug;

use anthro_core::errors::AnthroResult;
use anthro_core::reference::ReferenceTables;
use anthro_core::traits::RecordValidator;
use anthro_core::{Record, ValidationResult};

use crate::checks::{bounds, mass, proportions, stature, Findings};

/// Stateless record consistency checker.
///
/// Holds the reference tables and nothing else. [`validate`] is a pure
/// function of the record and the tables, so one instance can serve
/// concurrent callers without locking.
///
/// [`validate`]: ConsistencyChecker::validate
#[derive(Debug, Clone, Default)]
pub struct ConsistencyChecker {
    tables: ReferenceTables,
}

impl ConsistencyChecker {
    /// Checker with the built-in reference tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checker with caller-supplied tables, verified against the table
    /// invariants: per-sex age intervals ascending, non-overlapping, and
    /// collectively covering `[0, 150)`; every ratio range `0 < min ≤ max`.
    pub fn with_tables(tables: ReferenceTables) -> AnthroResult<Self> {
        tables.validate()?;
        Ok(Self { tables })
    }

    /// The tables this checker consults.
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Run the full rule sequence over one record.
    ///
    /// Two short-circuit gates: missing required fields, then base-value
    /// bounds. Past those, every remaining check runs; findings accumulate
    /// and the score is clamped to [0, 100] once at the end.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let mut findings = Findings::new();

        let Some(fields) = bounds::required(record, &mut findings) else {
            debug!(
                missing = findings.error_count(),
                "record rejected: missing required fields"
            );
            return findings.finish();
        };

        let Some(profile) = bounds::base(&fields, &mut findings) else {
            debug!(
                errors = findings.error_count(),
                "record rejected: base values out of bounds"
            );
            return findings.finish();
        };

        stature::check(&profile, &self.tables.heights, &mut findings);
        mass::check_bmi(&profile, &mut findings);
        proportions::check_ratios(record, &profile, &self.tables.ratios, &mut findings);
        mass::check_adult_weight(&profile, &mut findings);
        mass::check_child_weight(&profile, &mut findings);
        proportions::check_cross(record, &mut findings);

        let result = findings.finish();
        debug!(
            is_valid = result.is_valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            score = result.coherence_score,
            "record validated"
        );
        result
    }
}

impl RecordValidator for ConsistencyChecker {
    fn validate(&self, record: &Record) -> ValidationResult {
        ConsistencyChecker::validate(self, record)
    }
}

//! Rule families for record consistency checking.
//!
//! Each check inspects the record, appends findings with a fixed penalty,
//! and never fails. The engine sequences the checks and applies the two
//! short-circuit gates (missing required fields, base bounds).

pub mod bounds;
pub mod mass;
pub mod proportions;
pub mod stature;

use anthro_core::constants::SCORE_START;
use anthro_core::ValidationResult;

/// Accumulates findings and score deductions across checks.
///
/// The score is a running total starting at 100, deducted per finding and
/// clamped once on [`finish`](Findings::finish).
#[derive(Debug)]
pub struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
    score: f64,
}

impl Findings {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            score: SCORE_START,
        }
    }

    /// Record a hard violation and deduct `penalty`.
    pub fn error(&mut self, message: String, penalty: f64) {
        self.errors.push(message);
        self.score -= penalty;
    }

    /// Record a soft violation and deduct `penalty`.
    pub fn warning(&mut self, message: String, penalty: f64) {
        self.warnings.push(message);
        self.score -= penalty;
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Clamp the score and freeze into an immutable result.
    pub fn finish(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            coherence_score: self.score.clamp(0.0, 100.0),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}

impl Default for Findings {
    fn default() -> Self {
        Self::new()
    }
}

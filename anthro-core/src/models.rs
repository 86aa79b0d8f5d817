use serde::{Deserialize, Serialize};

/// Outcome of validating a single record.
///
/// Hard errors force `is_valid = false`; soft warnings are informational.
/// The coherence score starts at 100, loses a fixed amount per finding,
/// and is clamped to [0, 100] once at the end. Created once per validation
/// call and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub is_valid: bool,
    /// Hard rule violations, in check order.
    pub errors: Vec<String>,
    /// Soft rule violations, in check order.
    pub warnings: Vec<String>,
    /// 0–100 coherence score.
    pub coherence_score: f64,
}

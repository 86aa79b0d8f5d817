use crate::models::ValidationResult;
use crate::record::Record;

/// Single-record consistency validation.
///
/// Rule violations are data in the result, never `Err`. Implementations
/// must be pure functions of the record and their static tables, so one
/// instance can serve concurrent callers without locking.
pub trait RecordValidator: Send + Sync {
    /// Validate one record, producing the verdict, findings, and score.
    fn validate(&self, record: &Record) -> ValidationResult;
}

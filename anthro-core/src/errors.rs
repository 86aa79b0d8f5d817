//! Error types for the checker's construction paths.
//!
//! Rule violations are data (strings in a `ValidationResult`), never `Err`.
//! `AnthroError` covers the only fallible operations: parsing a sex token
//! and installing custom reference tables.

use crate::record::Sex;

/// Convenience alias used across the workspace.
pub type AnthroResult<T> = Result<T, AnthroError>;

#[derive(Debug, thiserror::Error)]
pub enum AnthroError {
    #[error("unknown sex token {value:?} (expected 'male'/'homme' or 'female'/'femme')")]
    UnknownSex { value: String },

    #[error("invalid height table for {sex}: {reason}")]
    InvalidHeightTable { sex: Sex, reason: String },

    #[error("invalid ratio range for {ratio}: {min}-{max}")]
    InvalidRatioRange {
        ratio: &'static str,
        min: f64,
        max: f64,
    },
}

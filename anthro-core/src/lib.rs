//! # anthro-core
//!
//! Foundation crate for the anthropometric consistency checker.
//! Defines the input record, the validation result, the static reference
//! tables, errors, constants, and the validator trait.

pub mod constants;
pub mod errors;
pub mod models;
pub mod record;
pub mod reference;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{AnthroError, AnthroResult};
pub use models::ValidationResult;
pub use record::{Record, Sex};
pub use reference::{HeightRangeTable, RatioRange, RatioTable, ReferenceTables};
pub use traits::RecordValidator;

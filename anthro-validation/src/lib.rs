//! # anthro-validation
//!
//! Rule-based consistency checking for single anthropometric records.
//!
//! ## Rule families
//! 1. **Bounds** — required fields and base-value plausibility; the two
//!    short-circuit gates
//! 2. **Stature** — height against the per-sex, per-age reference range
//! 3. **Mass** — BMI bands, adult weight-for-height, child weight estimate
//! 4. **Proportions** — body ratios and cross-measurement contradictions
//!
//! Violations are accumulated as data: hard errors fail the record, soft
//! warnings only deduct from the 0–100 coherence score. Every check is an
//! independent, stateless comparison against a static table or closed-form
//! formula.

pub mod checks;
pub mod engine;

pub use engine::ConsistencyChecker;

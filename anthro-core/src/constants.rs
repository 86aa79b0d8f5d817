/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score every record starts from; findings subtract fixed penalties.
pub const SCORE_START: f64 = 100.0;

/// Penalty per missing required field.
pub const PENALTY_MISSING_FIELD: f64 = 25.0;

/// Penalty per out-of-bounds base value (age, sex, height, weight).
pub const PENALTY_BASE_BOUND: f64 = 20.0;

/// Penalty for height outside the age/sex reference range.
pub const PENALTY_HEIGHT_RANGE: f64 = 15.0;

/// Penalty for an extreme BMI (hard error band).
pub const PENALTY_BMI_EXTREME: f64 = 15.0;

/// Penalty for an unusual BMI (soft warning band).
pub const PENALTY_BMI_UNUSUAL: f64 = 5.0;

/// Penalty for a body ratio outside its reference range.
pub const PENALTY_RATIO: f64 = 10.0;

/// Penalty for an arm span outside range but within tolerance.
pub const PENALTY_SPAN_ATYPICAL: f64 = 3.0;

/// Penalty for adult weight outside the plausible weight-for-height band.
pub const PENALTY_ADULT_WEIGHT: f64 = 10.0;

/// Penalty for a child weight far from the age/height estimate.
pub const PENALTY_CHILD_WEIGHT: f64 = 5.0;

/// Penalty per contradictory measurement pair.
pub const PENALTY_CROSS_MEASUREMENT: f64 = 10.0;

/// Maximum plausible age in years.
pub const AGE_MAX_YEARS: i64 = 120;

/// Maximum plausible height in cm.
pub const HEIGHT_MAX_CM: f64 = 300.0;

/// Maximum plausible weight in kg.
pub const WEIGHT_MAX_KG: f64 = 500.0;

/// BMI band outside which a record is rejected outright.
pub const BMI_EXTREME_LOW: f64 = 10.0;
pub const BMI_EXTREME_HIGH: f64 = 50.0;

/// BMI band outside which a record is flagged but not rejected.
pub const BMI_UNUSUAL_LOW: f64 = 13.0;
pub const BMI_UNUSUAL_HIGH: f64 = 40.0;

/// Absolute slack on the span/height ratio before a violation hardens
/// from warning to error. Applies to the span ratio only.
pub const SPAN_RATIO_TOLERANCE: f64 = 0.10;

/// Age at which the adult weight-for-height band applies.
pub const ADULT_AGE_YEARS: i64 = 18;

/// BMI bounds used to derive the plausible adult weight from height.
pub const ADULT_BMI_MIN: f64 = 16.0;
pub const ADULT_BMI_MAX: f64 = 35.0;

/// Margins applied to the derived adult weight bounds.
pub const ADULT_WEIGHT_MARGIN_LOW: f64 = 0.8;
pub const ADULT_WEIGHT_MARGIN_HIGH: f64 = 1.2;

/// Maximum relative deviation from the child weight estimate before warning.
pub const CHILD_WEIGHT_MAX_DEVIATION: f64 = 0.5;

/// Reference BMI used to estimate adolescent weight from height.
pub const ADOLESCENT_REFERENCE_BMI: f64 = 19.0;

/// Upper bound (exclusive) of the age coverage every height table must provide.
pub const HEIGHT_TABLE_AGE_COVER: i64 = 150;

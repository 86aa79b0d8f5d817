//! The anthropometric input record and the sex enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AnthroError;

/// Biological sex, as keyed by the height reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = AnthroError;

    /// Case-insensitive; accepts English and French tokens, since upstream
    /// form handlers supply either.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "homme" => Ok(Sex::Male),
            "female" | "femme" => Ok(Sex::Female),
            _ => Err(AnthroError::UnknownSex {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// A single anthropometric record, as supplied by a form handler or
/// batch importer.
///
/// Every field is optional: the checker reports missing required fields as
/// findings rather than refusing to deserialize. `sex` stays a raw token
/// here so an unknown value surfaces as a bounds finding, not a parse
/// failure. Lengths are in centimeters, weight in kilograms, age in whole
/// years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Age in years. Required.
    pub age: Option<i64>,
    /// Sex token. Required.
    pub sex: Option<String>,
    /// Standing height in cm. Required.
    pub height: Option<f64>,
    /// Body weight in kg. Required.
    pub weight: Option<f64>,
    /// Waist circumference in cm.
    pub waist_circumference: Option<f64>,
    /// Arm span in cm.
    pub arm_span: Option<f64>,
    /// Leg length in cm.
    pub leg_length: Option<f64>,
    /// Mother's height in cm. Accepted but not evaluated by any check.
    pub mother_height: Option<f64>,
    /// Father's height in cm. Accepted but not evaluated by any check.
    pub father_height: Option<f64>,
}

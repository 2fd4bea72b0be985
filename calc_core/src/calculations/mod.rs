//! # Calculators
//!
//! One module per calculator. Each follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> CalcResult<*Result>` - Pure calculation function
//!
//! Every `calculate` runs its input's validation gate first and never
//! returns a partial result.
//!
//! ## Available Calculations
//!
//! - [`length`] - Length unit conversion
//! - [`circle_area`] - Area of a circle from radius or diameter
//! - [`circumference`] - Circumference from radius
//! - [`bend`] - Bend allowance, setback and bend deduction
//! - [`flat_pattern`] - Multi-segment flat-pattern length

pub mod bend;
pub mod circle_area;
pub mod circumference;
pub mod flat_pattern;
pub mod length;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use bend::{BendInput, BendResult};
pub use circle_area::{CircleAreaInput, CircleAreaResult};
pub use circumference::{CircumferenceInput, CircumferenceResult};
pub use flat_pattern::{BendBreakdown, FlatPatternInput, FlatPatternResult, Segment};
pub use length::{LengthConversionInput, LengthConversionResult};

/// A display-ready number and its unit tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedValue {
    /// Fixed-decimal text
    pub value: String,
    /// Unit symbol
    pub unit: String,
}

impl FormattedValue {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        FormattedValue {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Enum wrapper for all calculation inputs.
///
/// Lets a JSON document name the calculator it wants:
///
/// ```json
/// { "type": "Circumference", "radius": 10.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    LengthConversion(LengthConversionInput),
    CircleArea(CircleAreaInput),
    Circumference(CircumferenceInput),
    Bend(BendInput),
    FlatPattern(FlatPatternInput),
}

/// Enum wrapper for all calculation results, tagged like [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    LengthConversion(LengthConversionResult),
    CircleArea(CircleAreaResult),
    Circumference(CircumferenceResult),
    Bend(BendResult),
    FlatPattern(FlatPatternResult),
}

impl CalculationItem {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::LengthConversion(_) => "LengthConversion",
            CalculationItem::CircleArea(_) => "CircleArea",
            CalculationItem::Circumference(_) => "Circumference",
            CalculationItem::Bend(_) => "Bend",
            CalculationItem::FlatPattern(_) => "FlatPattern",
        }
    }

    /// Run the matching calculator
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        Ok(match self {
            CalculationItem::LengthConversion(input) => CalculationOutput::LengthConversion(length::calculate(input)?),
            CalculationItem::CircleArea(input) => CalculationOutput::CircleArea(circle_area::calculate(input)?),
            CalculationItem::Circumference(input) => CalculationOutput::Circumference(circumference::calculate(input)?),
            CalculationItem::Bend(input) => CalculationOutput::Bend(bend::calculate(input)?),
            CalculationItem::FlatPattern(input) => CalculationOutput::FlatPattern(flat_pattern::calculate(input)?),
        })
    }
}

impl CalculationOutput {
    /// The primary display value of this result
    pub fn headline(&self) -> FormattedValue {
        match self {
            CalculationOutput::LengthConversion(r) => r.headline(),
            CalculationOutput::CircleArea(r) => r.headline(),
            CalculationOutput::Circumference(r) => r.headline(),
            CalculationOutput::Bend(r) => r.headline(),
            CalculationOutput::FlatPattern(r) => r.headline(),
        }
    }
}

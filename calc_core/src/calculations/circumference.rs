//! # Circumference
//!
//! Circumference of a circle from its radius. Displayed at 3 decimals in the
//! radius unit (millimeters unless specified).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::FormattedValue;
use crate::equations::geometry::circumference;
use crate::errors::{CalcError, CalcResult};
use crate::numeric::format_number;
use crate::units::{ConversionUnit, LengthUnit};

/// Fraction digits shown for the circumference
const DISPLAY_DIGITS: usize = 3;

fn default_unit() -> LengthUnit {
    LengthUnit::Millimeter
}

/// Input for the circumference calculator.
///
/// ## JSON Example
///
/// ```json
/// { "radius": 12.5, "unit": "mm" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircumferenceInput {
    /// Circle radius
    pub radius: f64,
    /// Unit of the radius and the result
    #[serde(default = "default_unit")]
    pub unit: LengthUnit,
}

impl CircumferenceInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(CalcError::invalid_input(
                "radius",
                self.radius.to_string(),
                "Enter a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Circumference result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircumferenceResult {
    /// C = 2πr
    pub circumference: f64,
    /// Unit of the result
    pub unit: LengthUnit,
}

impl CircumferenceResult {
    /// Circumference at 3 decimals with its unit
    pub fn headline(&self) -> FormattedValue {
        FormattedValue::new(format_number(self.circumference, DISPLAY_DIGITS), self.unit.symbol())
    }
}

/// Calculate circumference.
pub fn calculate(input: &CircumferenceInput) -> CalcResult<CircumferenceResult> {
    input.validate()?;

    let c = circumference(input.radius);
    debug!(radius = input.radius, circumference = c, "circumference calculated");

    Ok(CircumferenceResult {
        circumference: c,
        unit: input.unit,
    })
}

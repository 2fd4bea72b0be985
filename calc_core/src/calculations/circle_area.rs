//! # Area of a Circle
//!
//! Computes circle area from a radius or diameter in any [`LengthUnit`],
//! reporting the area in any [`AreaUnit`]. All arithmetic runs in meters
//! and square meters; the radius is reported back in the input unit.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::circle_area::{calculate, CircleAreaInput};
//! use calc_core::equations::geometry::MeasureType;
//! use calc_core::units::{AreaUnit, LengthUnit};
//!
//! let input = CircleAreaInput {
//!     measure_type: MeasureType::Diameter,
//!     value: 2.0,
//!     input_unit: LengthUnit::Meter,
//!     output_unit: AreaUnit::SquareMeter,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.headline().value, "3.1416");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::FormattedValue;
use crate::equations::geometry::{circle_area, radius_from_measurement, MeasureType};
use crate::errors::{CalcError, CalcResult};
use crate::numeric::format_default;
use crate::units::{convert, AreaUnit, ConversionUnit, LengthUnit};

/// Input for the circle area calculator.
///
/// ## JSON Example
///
/// ```json
/// { "measure_type": "diameter", "value": 50.0, "input_unit": "mm", "output_unit": "cm²" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleAreaInput {
    /// Whether `value` is a radius or a diameter
    #[serde(default)]
    pub measure_type: MeasureType,
    /// Measured value in `input_unit`
    pub value: f64,
    /// Unit of the measured value
    pub input_unit: LengthUnit,
    /// Unit for the reported area
    pub output_unit: AreaUnit,
}

impl CircleAreaInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.value.is_finite() && self.value >= 0.0) {
            return Err(CalcError::invalid_input(
                self.measure_type.label(),
                self.value.to_string(),
                "Value must be a non-negative number.",
            ));
        }
        Ok(())
    }
}

/// Circle area results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleAreaResult {
    /// How the radius was measured
    pub measure_type: MeasureType,
    /// Radius in the input unit
    pub radius: f64,
    /// Input unit
    pub input_unit: LengthUnit,
    /// Radius in meters
    pub radius_m: f64,
    /// Area in square meters
    pub area_m2: f64,
    /// Area in the output unit
    pub area: f64,
    /// Output unit
    pub output_unit: AreaUnit,
}

impl CircleAreaResult {
    /// Area at 4 decimals with its unit
    pub fn headline(&self) -> FormattedValue {
        FormattedValue::new(format_default(self.area), self.output_unit.symbol())
    }

    /// Radius at 4 decimals in the input unit
    pub fn radius_display(&self) -> FormattedValue {
        FormattedValue::new(format_default(self.radius), self.input_unit.symbol())
    }
}

/// Calculate circle area.
pub fn calculate(input: &CircleAreaInput) -> CalcResult<CircleAreaResult> {
    input.validate()?;

    let length_m = convert(input.value, input.input_unit, LengthUnit::Meter);
    let radius_m = radius_from_measurement(length_m, input.measure_type);
    let area_m2 = circle_area(radius_m);
    let area = convert(area_m2, AreaUnit::SquareMeter, input.output_unit);
    let radius = convert(radius_m, LengthUnit::Meter, input.input_unit);

    debug!(radius_m, area_m2, output = %input.output_unit, "circle area calculated");

    Ok(CircleAreaResult {
        measure_type: input.measure_type,
        radius,
        input_unit: input.input_unit,
        radius_m,
        area_m2,
        area,
        output_unit: input.output_unit,
    })
}

//! # Length Conversion
//!
//! Converts a length between any two units of the [`LengthUnit`] table.
//! Any finite value converts, including negatives.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::length::{calculate, LengthConversionInput};
//! use calc_core::units::LengthUnit;
//!
//! let input = LengthConversionInput {
//!     value: 254.0,
//!     from: LengthUnit::Millimeter,
//!     to: LengthUnit::Inch,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.headline().value, "10.0000");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::FormattedValue;
use crate::errors::{CalcError, CalcResult};
use crate::numeric::format_default;
use crate::units::{convert, ConversionUnit, LengthUnit};

/// Input for a length conversion.
///
/// ## JSON Example
///
/// ```json
/// { "value": 12.0, "from": "in", "to": "ft" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthConversionInput {
    /// Value to convert
    pub value: f64,
    /// Source unit
    pub from: LengthUnit,
    /// Target unit
    pub to: LengthUnit,
}

impl LengthConversionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.value.is_finite() {
            return Err(CalcError::invalid_input(
                "value",
                self.value.to_string(),
                "Value must be a finite number",
            ));
        }
        Ok(())
    }
}

/// Converted length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthConversionResult {
    /// Converted value in `unit`
    pub value: f64,
    /// Target unit
    pub unit: LengthUnit,
}

impl LengthConversionResult {
    /// Display value at 4 decimals with the target unit
    pub fn headline(&self) -> FormattedValue {
        FormattedValue::new(format_default(self.value), self.unit.symbol())
    }
}

/// Convert a length.
pub fn calculate(input: &LengthConversionInput) -> CalcResult<LengthConversionResult> {
    input.validate()?;

    let value = convert(input.value, input.from, input.to);
    debug!(from = %input.from, to = %input.to, input = input.value, value, "length converted");

    Ok(LengthConversionResult { value, unit: input.to })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_inches() {
        let input = LengthConversionInput {
            value: 25.4,
            from: LengthUnit::Millimeter,
            to: LengthUnit::Inch,
        };
        let result = calculate(&input).unwrap();
        assert!((result.value - 1.0).abs() < 1e-12, "value = {}", result.value);
        assert_eq!(result.headline().to_string(), "1.0000 in");
    }

    #[test]
    fn test_same_unit_is_exact() {
        let input = LengthConversionInput {
            value: 0.1 + 0.2,
            from: LengthUnit::Foot,
            to: LengthUnit::Foot,
        };
        assert_eq!(calculate(&input).unwrap().value, 0.1 + 0.2);
    }

    #[test]
    fn test_negative_values_convert() {
        let input = LengthConversionInput {
            value: -1.0,
            from: LengthUnit::Kilometer,
            to: LengthUnit::Meter,
        };
        assert_eq!(calculate(&input).unwrap().value, -1000.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let input = LengthConversionInput {
            value: f64::NAN,
            from: LengthUnit::Meter,
            to: LengthUnit::Mile,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }
}

//! # Single Bend Calculation
//!
//! Bend allowance, setback and bend deduction for one bend. Backs both the
//! bend-allowance and bend-deduction calculators.
//!
//! The validation gate runs before any formula. A single failing field
//! rejects the whole input and no partial result is produced.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::bend::{calculate, BendInput};
//! use calc_core::equations::sheet_metal::BendParameters;
//! use calc_core::units::UnitSystem;
//!
//! let input = BendInput {
//!     params: BendParameters { angle_deg: 90.0, inside_radius: 1.0, thickness: 1.0, k_factor: 0.4 },
//!     unit_system: UnitSystem::Millimeters,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.headline().value, "2.199");
//! assert_eq!(result.deduction_headline().value, "1.801");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::FormattedValue;
use crate::equations::sheet_metal::{bend_allowance, bend_deduction, setback, BendParameters};
use crate::errors::CalcResult;
use crate::units::{round_by_unit, UnitSystem};

/// Input for a single bend.
///
/// ## JSON Example
///
/// ```json
/// {
///   "angle_deg": 90.0,
///   "inside_radius": 1.0,
///   "thickness": 1.0,
///   "k_factor": 0.4,
///   "unit_system": "mm"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendInput {
    /// Angle, radius, thickness and K-factor
    #[serde(flatten)]
    pub params: BendParameters,
    /// Unit system of radius and thickness
    #[serde(default)]
    pub unit_system: UnitSystem,
}

/// Results for a single bend, all lengths in the input unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendResult {
    /// Neutral-axis arc length
    pub bend_allowance: f64,
    /// Bend line to mold-line corner
    pub setback: f64,
    /// 2 × setback − bend allowance
    pub bend_deduction: f64,
    /// Unit system of every length above
    pub unit_system: UnitSystem,
}

impl BendResult {
    /// Bend allowance rounded for its unit system
    pub fn headline(&self) -> FormattedValue {
        self.display(self.bend_allowance)
    }

    /// Bend deduction rounded for its unit system
    pub fn deduction_headline(&self) -> FormattedValue {
        self.display(self.bend_deduction)
    }

    /// Setback rounded for its unit system
    pub fn setback_display(&self) -> FormattedValue {
        self.display(self.setback)
    }

    fn display(&self, value: f64) -> FormattedValue {
        FormattedValue::new(round_by_unit(value, self.unit_system), self.unit_system.symbol())
    }
}

/// Calculate one bend.
pub fn calculate(input: &BendInput) -> CalcResult<BendResult> {
    if let Err(err) = input.params.validate() {
        debug!(%err, "bend parameters rejected");
        return Err(err);
    }

    let p = &input.params;
    let result = BendResult {
        bend_allowance: bend_allowance(p),
        setback: setback(p),
        bend_deduction: bend_deduction(p),
        unit_system: input.unit_system,
    };

    debug!(
        angle_deg = p.angle_deg,
        inside_radius = p.inside_radius,
        thickness = p.thickness,
        k_factor = p.k_factor,
        bend_allowance = result.bend_allowance,
        bend_deduction = result.bend_deduction,
        "bend calculated"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(angle_deg: f64, inside_radius: f64, thickness: f64, k_factor: f64, unit_system: UnitSystem) -> BendInput {
        BendInput {
            params: BendParameters {
                angle_deg,
                inside_radius,
                thickness,
                k_factor,
            },
            unit_system,
        }
    }

    #[test]
    fn test_right_angle_mm() {
        let result = calculate(&input(90.0, 1.0, 1.0, 0.4, UnitSystem::Millimeters)).unwrap();
        assert_eq!(result.headline().to_string(), "2.199 mm");
        assert_eq!(result.setback_display().value, "2.000");
        assert_eq!(result.deduction_headline().value, "1.801");
    }

    #[test]
    fn test_inches_use_four_digits() {
        let result = calculate(&input(90.0, 1.0, 1.0, 0.4, UnitSystem::Inches)).unwrap();
        assert_eq!(result.headline().to_string(), "2.1991 in");
        assert_eq!(result.deduction_headline().value, "1.8009");
    }

    #[test]
    fn test_invalid_input_has_no_result() {
        let err = calculate(&input(90.0, 1.0, 0.0, 0.4, UnitSystem::Millimeters)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_json_flattens_parameters() {
        let json = r#"{ "angle_deg": 45.0, "inside_radius": 2.0, "thickness": 1.5, "k_factor": 0.33 }"#;
        let parsed: BendInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.unit_system, UnitSystem::Millimeters);
        assert_eq!(parsed.params.k_factor, 0.33);
    }
}

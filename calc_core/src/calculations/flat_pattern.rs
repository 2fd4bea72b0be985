//! # Flat Pattern Length
//!
//! Developed (flat) length of a part made of an ordered run of segments.
//! Each segment contributes its straight length; a segment with a bend angle
//! above zero also contributes the bend allowance of that bend.
//!
//! ```text
//! flat = Σ length_i + Σ BA_i      (BA_i only where angle_i > 0)
//! ```
//!
//! Lengths are measured tangent-to-tangent along the neutral axis. A
//! segment's inside radius is its own override when that is finite, else the
//! shared default radius.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::flat_pattern::{calculate, FlatPatternInput, Segment};
//! use calc_core::units::UnitSystem;
//!
//! let input = FlatPatternInput {
//!     unit_system: UnitSystem::Millimeters,
//!     thickness: 1.0,
//!     default_inside_radius: None,
//!     k_factor: 0.4,
//!     segments: vec![Segment::straight(10.0), Segment::bent(20.0, 90.0).with_radius(2.0)],
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.headline().value, "33.770");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::FormattedValue;
use crate::equations::sheet_metal::{arc_length, MAX_BEND_ANGLE_DEG};
use crate::errors::{CalcError, CalcResult};
use crate::units::{round_by_unit, UnitSystem};

/// One segment of the developed path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Straight length, zero or more
    pub length: f64,
    /// Bend angle at the end of this segment, 0 to 180 degrees
    #[serde(default)]
    pub angle_deg: f64,
    /// Inside radius overriding the default for this bend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inside_radius: Option<f64>,
}

impl Segment {
    /// Straight run with no bend
    pub fn straight(length: f64) -> Self {
        Segment {
            length,
            angle_deg: 0.0,
            inside_radius: None,
        }
    }

    /// Segment ending in a bend at the default radius
    pub fn bent(length: f64, angle_deg: f64) -> Self {
        Segment {
            length,
            angle_deg,
            inside_radius: None,
        }
    }

    /// Override the inside radius for this bend
    pub fn with_radius(mut self, inside_radius: f64) -> Self {
        self.inside_radius = Some(inside_radius);
        self
    }

    /// True when this segment contributes a bend allowance
    pub fn has_bend(&self) -> bool {
        self.angle_deg > 0.0
    }

    /// Override if present and finite, else the default. NaN when neither.
    pub fn resolve_radius(&self, default_inside_radius: Option<f64>) -> f64 {
        self.inside_radius
            .filter(|r| r.is_finite())
            .or(default_inside_radius)
            .unwrap_or(f64::NAN)
    }
}

/// Input for the flat-pattern calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "unit_system": "mm",
///   "thickness": 1.0,
///   "default_inside_radius": 1.5,
///   "k_factor": 0.4,
///   "segments": [
///     { "length": 10.0 },
///     { "length": 20.0, "angle_deg": 90.0, "inside_radius": 2.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatPatternInput {
    /// Unit system of every length
    #[serde(default)]
    pub unit_system: UnitSystem,
    /// Material thickness
    pub thickness: f64,
    /// Radius used by bends without an override
    #[serde(default)]
    pub default_inside_radius: Option<f64>,
    /// K-factor shared by all bends
    pub k_factor: f64,
    /// Ordered segments
    pub segments: Vec<Segment>,
}

impl FlatPatternInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.thickness.is_finite() && self.thickness > 0.0) {
            return Err(CalcError::invalid_input(
                "thickness",
                self.thickness.to_string(),
                "Thickness must be greater than zero",
            ));
        }
        if !(self.k_factor.is_finite() && (0.0..=1.0).contains(&self.k_factor)) {
            return Err(CalcError::invalid_input(
                "k_factor",
                self.k_factor.to_string(),
                "K-factor must be between 0 and 1",
            ));
        }
        if let Some(r) = self.default_inside_radius {
            if !(r.is_finite() && r >= 0.0) {
                return Err(CalcError::invalid_input(
                    "default_inside_radius",
                    r.to_string(),
                    "Default inside radius cannot be negative",
                ));
            }
        }
        if self.segments.is_empty() {
            return Err(CalcError::invalid_input("segments", "[]", "At least one segment is required"));
        }

        for (i, segment) in self.segments.iter().enumerate() {
            let n = i + 1;
            if !(segment.length.is_finite() && segment.length >= 0.0) {
                return Err(CalcError::invalid_input(
                    format!("segments[{n}].length"),
                    segment.length.to_string(),
                    "Segment length cannot be negative",
                ));
            }
            if !(segment.angle_deg.is_finite() && (0.0..=MAX_BEND_ANGLE_DEG).contains(&segment.angle_deg)) {
                return Err(CalcError::invalid_input(
                    format!("segments[{n}].angle_deg"),
                    segment.angle_deg.to_string(),
                    "Bend angle must be between 0 and 180 degrees",
                ));
            }
            if segment.has_bend() {
                let r = segment.resolve_radius(self.default_inside_radius);
                if !(r.is_finite() && r >= 0.0) {
                    return Err(CalcError::invalid_input(
                        format!("segments[{n}].inside_radius"),
                        r.to_string(),
                        "Bend needs a non-negative inside radius (per segment or default)",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Bend allowance detail for one bent segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendBreakdown {
    /// 1-based segment number
    pub index: usize,
    /// Bend angle in degrees
    pub angle_deg: f64,
    /// Resolved inside radius
    pub radius: f64,
    /// Bend allowance of this bend
    pub bend_allowance: f64,
}

/// Flat-pattern results, all lengths in the input unit system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatPatternResult {
    /// Σ segment lengths
    pub sum_straight: f64,
    /// Σ bend allowances
    pub sum_bend_allowance: f64,
    /// sum_straight + sum_bend_allowance
    pub flat_length: f64,
    /// One entry per bent segment, in input order
    pub per_bend: Vec<BendBreakdown>,
    /// Unit system of every length above
    pub unit_system: UnitSystem,
}

impl FlatPatternResult {
    /// Flat length rounded for its unit system
    pub fn headline(&self) -> FormattedValue {
        self.display(self.flat_length)
    }

    /// Rounded display of any length in this result's unit system
    pub fn display(&self, value: f64) -> FormattedValue {
        FormattedValue::new(round_by_unit(value, self.unit_system), self.unit_system.symbol())
    }
}

/// Calculate the flat-pattern length.
pub fn calculate(input: &FlatPatternInput) -> CalcResult<FlatPatternResult> {
    if let Err(err) = input.validate() {
        debug!(%err, "flat pattern rejected");
        return Err(err);
    }

    let mut sum_straight = 0.0;
    let mut sum_bend_allowance = 0.0;
    let mut per_bend = Vec::new();

    for (i, segment) in input.segments.iter().enumerate() {
        sum_straight += segment.length;
        if !segment.has_bend() {
            continue;
        }
        let radius = segment.resolve_radius(input.default_inside_radius);
        let ba = arc_length(segment.angle_deg, radius, input.thickness, input.k_factor);
        sum_bend_allowance += ba;
        per_bend.push(BendBreakdown {
            index: i + 1,
            angle_deg: segment.angle_deg,
            radius,
            bend_allowance: ba,
        });
    }

    let flat_length = sum_straight + sum_bend_allowance;
    debug!(
        segments = input.segments.len(),
        bends = per_bend.len(),
        sum_straight,
        sum_bend_allowance,
        flat_length,
        "flat pattern calculated"
    );

    Ok(FlatPatternResult {
        sum_straight,
        sum_bend_allowance,
        flat_length,
        per_bend,
        unit_system: input.unit_system,
    })
}

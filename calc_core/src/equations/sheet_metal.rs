//! # Sheet-Metal Bend Formulas
//!
//! Bend allowance, setback and bend deduction for a single bend, plus the
//! K-factor preset table.
//!
//! These formulas do no bounds checking of their own. Run
//! [`validate_bend_parameters`] (or [`BendParameters::validate`]) first;
//! called on out-of-range data they silently return meaningless values such
//! as negative lengths.
//!
//! ## Notation
//!
//! - `θ` = Bend angle (degrees in inputs, radians in formulas)
//! - `R` = Inside bend radius
//! - `T` = Material thickness
//! - `K` = K-factor, neutral axis offset as a fraction of `T`
//! - `BA` = Bend allowance
//! - `SB` = Outside setback
//! - `BD` = Bend deduction
//!
//! ```text
//!          mold line corner
//!        ·  ←SB→ ┐
//!        ·       │ T
//!   ─────────────╮
//!                 ╲  R + K·T (neutral axis)
//!                  │
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest accepted bend angle in degrees
pub const MAX_BEND_ANGLE_DEG: f64 = 180.0;

/// Inputs for a single bend. Lengths share one unit system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendParameters {
    /// Bend angle in degrees, 0 to 180
    pub angle_deg: f64,
    /// Inside bend radius, zero or more
    pub inside_radius: f64,
    /// Material thickness, strictly positive
    pub thickness: f64,
    /// K-factor, 0 to 1
    pub k_factor: f64,
}

impl BendParameters {
    /// Run the validation gate, reporting the first failing field.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.angle_deg.is_finite() && (0.0..=MAX_BEND_ANGLE_DEG).contains(&self.angle_deg)) {
            return Err(CalcError::invalid_input(
                "angle_deg",
                self.angle_deg.to_string(),
                "Bend angle must be between 0 and 180 degrees",
            ));
        }
        if !(self.inside_radius.is_finite() && self.inside_radius >= 0.0) {
            return Err(CalcError::invalid_input(
                "inside_radius",
                self.inside_radius.to_string(),
                "Inside radius cannot be negative",
            ));
        }
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
        Ok(())
    }

    /// Bend angle in radians
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }
}

/// True iff every field is finite and within range:
/// θ ∈ [0, 180], R ≥ 0, T > 0, K ∈ [0, 1].
pub fn validate_bend_parameters(params: &BendParameters) -> bool {
    params.validate().is_ok()
}

/// Calculate bend allowance, the arc length of the neutral axis
///
/// # Formula
/// BA = θ × (R + K × T), θ in radians
///
/// # Example
/// ```rust
/// use calc_core::equations::sheet_metal::{bend_allowance, BendParameters};
///
/// let p = BendParameters { angle_deg: 90.0, inside_radius: 1.0, thickness: 1.0, k_factor: 0.4 };
/// assert!((bend_allowance(&p) - 2.199114857512855).abs() < 1e-12);
/// ```
#[inline]
pub fn bend_allowance(params: &BendParameters) -> f64 {
    arc_length(params.angle_deg, params.inside_radius, params.thickness, params.k_factor)
}

/// Neutral-axis arc length for one bend given its radius.
///
/// Shared by [`bend_allowance`] and flat-pattern segments, where the radius
/// varies per bend.
#[inline]
pub fn arc_length(angle_deg: f64, inside_radius: f64, thickness: f64, k_factor: f64) -> f64 {
    angle_deg.to_radians() * (inside_radius + k_factor * thickness)
}

/// Calculate outside setback, bend line to mold-line corner
///
/// # Formula
/// SB = (R + T) × tan(θ / 2)
#[inline]
pub fn setback(params: &BendParameters) -> f64 {
    (params.inside_radius + params.thickness) * (params.angle_rad() / 2.0).tan()
}

/// Calculate bend deduction, subtracted from the sum of outside leg lengths
///
/// # Formula
/// BD = 2 × SB − BA
#[inline]
pub fn bend_deduction(params: &BendParameters) -> f64 {
    2.0 * setback(params) - bend_allowance(params)
}

/// Common material K-factors.
///
/// Selecting a preset pre-fills the K-factor field once; the field stays
/// editable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KFactorPreset {
    None,
    #[default]
    MildSteel,
    Aluminum,
    Stainless,
}

impl KFactorPreset {
    /// All presets in menu order
    pub const ALL: [KFactorPreset; 4] = [
        KFactorPreset::None,
        KFactorPreset::MildSteel,
        KFactorPreset::Aluminum,
        KFactorPreset::Stainless,
    ];

    /// K-factor for this material, `None` for no autofill
    pub fn k_factor(self) -> Option<f64> {
        match self {
            KFactorPreset::None => None,
            KFactorPreset::MildSteel => Some(0.40),
            KFactorPreset::Aluminum => Some(0.33),
            KFactorPreset::Stainless => Some(0.45),
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            KFactorPreset::None => "None",
            KFactorPreset::MildSteel => "Mild Steel (0.40)",
            KFactorPreset::Aluminum => "Aluminum (0.33)",
            KFactorPreset::Stainless => "Stainless (0.45)",
        }
    }

    fn key(self) -> &'static str {
        match self {
            KFactorPreset::None => "none",
            KFactorPreset::MildSteel => "mild-steel",
            KFactorPreset::Aluminum => "aluminum",
            KFactorPreset::Stainless => "stainless",
        }
    }
}

impl FromStr for KFactorPreset {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        KFactorPreset::ALL
            .into_iter()
            .find(|preset| preset.key() == key || (key == "mildsteel" && *preset == KFactorPreset::MildSteel))
            .ok_or_else(|| CalcError::invalid_input("k_preset", s, "Unknown K-factor preset"))
    }
}

impl fmt::Display for KFactorPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

//! # Unit Types
//!
//! Closed unit enumerations with static conversion tables, plus lightweight
//! newtype wrappers for the two sheet-metal unit systems.
//!
//! ## Tables
//!
//! - [`LengthUnit`] - factor to meters
//! - [`AreaUnit`] - factor to square meters
//! - [`UnitSystem`] - millimeters or inches, related by exactly 25.4
//!
//! Every tag has exactly one strictly positive factor. Conversions go through
//! the base unit: `value * factor(from) / factor(to)`. Converting a unit to
//! itself returns the input untouched.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{convert, Inches, LengthUnit, Millimeters};
//!
//! let feet = convert(12.0, LengthUnit::Inch, LengthUnit::Foot);
//! assert!((feet - 1.0).abs() < 1e-12);
//!
//! let mm: Millimeters = Inches(2.0).into();
//! assert_eq!(mm.0, 50.8);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::numeric::format_number;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// A unit tag backed by a static factor to its table's base unit.
pub trait ConversionUnit: Copy + PartialEq {
    /// Factor that converts one of this unit into the base unit
    fn factor(self) -> f64;

    /// Short display symbol
    fn symbol(self) -> &'static str;
}

/// Convert `value` between two units of the same table.
///
/// Non-finite input yields NaN. Identical units return `value` unchanged.
pub fn convert<U: ConversionUnit>(value: f64, from: U, to: U) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }
    if from == to {
        return value;
    }
    value * from.factor() / to.factor()
}

// ============================================================================
// Length Units
// ============================================================================

/// Length unit, base unit meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "mi")]
    Mile,
}

impl LengthUnit {
    /// All length units in menu order
    pub const ALL: [LengthUnit; 7] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Kilometer,
        LengthUnit::Mile,
    ];

    /// Full unit name for menus
    pub fn name(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "Millimeters",
            LengthUnit::Centimeter => "Centimeters",
            LengthUnit::Meter => "Meters",
            LengthUnit::Inch => "Inches",
            LengthUnit::Foot => "Feet",
            LengthUnit::Kilometer => "Kilometers",
            LengthUnit::Mile => "Miles",
        }
    }

    /// The matching area unit, if the table has one
    pub fn squared(self) -> Option<AreaUnit> {
        match self {
            LengthUnit::Millimeter => Some(AreaUnit::SquareMillimeter),
            LengthUnit::Centimeter => Some(AreaUnit::SquareCentimeter),
            LengthUnit::Meter => Some(AreaUnit::SquareMeter),
            LengthUnit::Inch => Some(AreaUnit::SquareInch),
            LengthUnit::Foot => Some(AreaUnit::SquareFoot),
            LengthUnit::Kilometer | LengthUnit::Mile => None,
        }
    }
}

impl ConversionUnit for LengthUnit {
    fn factor(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Mile => 1609.34,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Kilometer => "km",
            LengthUnit::Mile => "mi",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeter),
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Centimeter),
            "m" | "meter" | "meters" => Ok(LengthUnit::Meter),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inch),
            "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
            "km" | "kilometer" | "kilometers" => Ok(LengthUnit::Kilometer),
            "mi" | "mile" | "miles" => Ok(LengthUnit::Mile),
            _ => Err(CalcError::unknown_unit(s)),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area unit, base unit square meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    #[serde(rename = "mm²")]
    SquareMillimeter,
    #[serde(rename = "cm²")]
    SquareCentimeter,
    #[serde(rename = "m²")]
    SquareMeter,
    #[serde(rename = "in²")]
    SquareInch,
    #[serde(rename = "ft²")]
    SquareFoot,
}

impl AreaUnit {
    /// All area units in menu order
    pub const ALL: [AreaUnit; 5] = [
        AreaUnit::SquareMillimeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMeter,
        AreaUnit::SquareInch,
        AreaUnit::SquareFoot,
    ];
}

impl ConversionUnit for AreaUnit {
    fn factor(self) -> f64 {
        match self {
            AreaUnit::SquareMillimeter => 1e-6,
            AreaUnit::SquareCentimeter => 1e-4,
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareInch => 0.00064516,
            AreaUnit::SquareFoot => 0.09290304,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMillimeter => "mm²",
            AreaUnit::SquareCentimeter => "cm²",
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareInch => "in²",
            AreaUnit::SquareFoot => "ft²",
        }
    }
}

impl FromStr for AreaUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let base = normalized
            .strip_suffix('²')
            .or_else(|| normalized.strip_suffix("^2"))
            .or_else(|| normalized.strip_suffix('2'))
            .or_else(|| normalized.strip_prefix("sq "))
            .or_else(|| normalized.strip_prefix("square "))
            .unwrap_or("");

        match base.trim().parse::<LengthUnit>().ok().and_then(LengthUnit::squared) {
            Some(unit) => Ok(unit),
            None => Err(CalcError::unknown_unit(s)),
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Sheet-Metal Unit System
// ============================================================================

/// Unit system for sheet-metal dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "in")]
    Inches,
}

impl UnitSystem {
    /// Both systems in menu order
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Millimeters, UnitSystem::Inches];

    /// Fraction digits used when displaying a dimension in this system
    pub fn display_digits(self) -> usize {
        match self {
            UnitSystem::Millimeters => 3,
            UnitSystem::Inches => 4,
        }
    }

    /// Equivalent length unit
    pub fn length_unit(self) -> LengthUnit {
        match self {
            UnitSystem::Millimeters => LengthUnit::Millimeter,
            UnitSystem::Inches => LengthUnit::Inch,
        }
    }

    /// Display symbol (`mm` or `in`)
    pub fn symbol(self) -> &'static str {
        self.length_unit().symbol()
    }
}

impl FromStr for UnitSystem {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<LengthUnit>() {
            Ok(LengthUnit::Millimeter) => Ok(UnitSystem::Millimeters),
            Ok(LengthUnit::Inch) => Ok(UnitSystem::Inches),
            _ => Err(CalcError::unknown_unit(s)),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert a sheet-metal dimension between unit systems.
///
/// Identity when the systems match; NaN for non-finite input.
pub fn convert_dimension(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if !value.is_finite() {
        return f64::NAN;
    }
    match (from, to) {
        (UnitSystem::Millimeters, UnitSystem::Inches) => Inches::from(Millimeters(value)).value(),
        (UnitSystem::Inches, UnitSystem::Millimeters) => Millimeters::from(Inches(value)).value(),
        _ => value,
    }
}

/// Round for display: 3 decimals in mm, 4 in inches. Empty for non-finite.
pub fn round_by_unit(value: f64, unit: UnitSystem) -> String {
    format_number(value, unit.display_digits())
}

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * MM_PER_INCH)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

impl Millimeters {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Inches {
    pub fn value(self) -> f64 {
        self.0
    }
}

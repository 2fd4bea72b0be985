//! # Calculator Catalog
//!
//! Static tables of calculator categories and calculators. The presentation
//! layer maps an identifier such as `"bend-deduction"` to its entry here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;
use crate::forms::RecomputeMode;

/// Calculator identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorId {
    LengthConverter,
    AreaOfCircle,
    Circumference,
    BendAllowance,
    BendDeduction,
    FlatPattern,
}

/// A catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorInfo {
    pub id: CalculatorId,
    pub name: &'static str,
    pub description: &'static str,
    /// Category id
    pub category: &'static str,
    /// Whether results track input live or wait for Calculate
    pub mode: RecomputeMode,
}

pub const CATEGORIES: [Category; 4] = [
    Category {
        id: "unit-conversion",
        name: "Unit Conversion",
        description: "Convert between different units of measurement",
    },
    Category {
        id: "measurements",
        name: "Measurements",
        description: "Calculate areas, volumes, and other measurements",
    },
    Category {
        id: "math",
        name: "Mathematical",
        description: "Perform mathematical calculations and operations",
    },
    Category {
        id: "fabrication",
        name: "Fabrication",
        description: "Sheet-metal bending and flat patterns",
    },
];

pub const CALCULATORS: [CalculatorInfo; 6] = [
    CalculatorInfo {
        id: CalculatorId::LengthConverter,
        name: "Length Converter",
        description: "Convert between different units of length",
        category: "unit-conversion",
        mode: RecomputeMode::Live,
    },
    CalculatorInfo {
        id: CalculatorId::AreaOfCircle,
        name: "Area of a Circle",
        description: "Area from a radius or diameter, in any area unit",
        category: "measurements",
        mode: RecomputeMode::Live,
    },
    CalculatorInfo {
        id: CalculatorId::Circumference,
        name: "Circumference",
        description: "Circumference of a circle from its radius",
        category: "measurements",
        mode: RecomputeMode::Live,
    },
    CalculatorInfo {
        id: CalculatorId::BendAllowance,
        name: "Bend Allowance",
        description: "Neutral-axis arc length of a sheet-metal bend",
        category: "fabrication",
        mode: RecomputeMode::OnDemand,
    },
    CalculatorInfo {
        id: CalculatorId::BendDeduction,
        name: "Bend Deduction",
        description: "Amount to subtract from the outside leg lengths of a bend",
        category: "fabrication",
        mode: RecomputeMode::OnDemand,
    },
    CalculatorInfo {
        id: CalculatorId::FlatPattern,
        name: "Flat Pattern Length",
        description: "Developed length of a multi-bend part",
        category: "fabrication",
        mode: RecomputeMode::OnDemand,
    },
];

impl CalculatorId {
    /// URL-style identifier
    pub fn as_str(self) -> &'static str {
        match self {
            CalculatorId::LengthConverter => "length-converter",
            CalculatorId::AreaOfCircle => "area-of-circle",
            CalculatorId::Circumference => "circumference",
            CalculatorId::BendAllowance => "bend-allowance",
            CalculatorId::BendDeduction => "bend-deduction",
            CalculatorId::FlatPattern => "flat-pattern",
        }
    }

    /// Catalog entry for this calculator
    pub fn info(self) -> &'static CalculatorInfo {
        CALCULATORS
            .iter()
            .find(|c| c.id == self)
            .unwrap_or_else(|| unreachable!("every calculator id has a catalog entry"))
    }
}

impl FromStr for CalculatorId {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find(s).map(|info| info.id)
    }
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up a calculator by identifier
pub fn find(id: &str) -> Result<&'static CalculatorInfo, CalcError> {
    CALCULATORS
        .iter()
        .find(|c| c.id.as_str() == id)
        .ok_or_else(|| CalcError::unknown_calculator(id))
}

/// Look up a category by identifier
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Calculators in a category, in catalog order
pub fn calculators_in(category_id: &str) -> impl Iterator<Item = &'static CalculatorInfo> + '_ {
    CALCULATORS.iter().filter(move |c| c.category == category_id)
}

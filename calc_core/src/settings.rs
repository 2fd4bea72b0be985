//! # Calculator Settings
//!
//! Defaults applied to newly created forms: the sheet-metal unit system,
//! the K-factor preset and the initial unit selections of the converters.
//! Settings are read from a JSON file; every field is optional.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "unit_system": "in",
//!   "k_preset": "aluminum",
//!   "length_from": "ft",
//!   "length_to": "m"
//! }
//! ```
//!
//! ```rust
//! use calc_core::settings::CalculatorSettings;
//! use calc_core::units::UnitSystem;
//!
//! let settings = CalculatorSettings::from_json_str(r#"{ "unit_system": "in" }"#).unwrap();
//! assert_eq!(settings.unit_system, UnitSystem::Inches);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::sheet_metal::KFactorPreset;
use crate::errors::{CalcError, CalcResult};
use crate::units::{AreaUnit, LengthUnit, UnitSystem};

/// Defaults for new calculator forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Unit system for the sheet-metal calculators
    pub unit_system: UnitSystem,

    /// K-factor preset pre-filled into sheet-metal forms
    pub k_preset: KFactorPreset,

    /// Length converter source unit
    pub length_from: LengthUnit,

    /// Length converter target unit
    pub length_to: LengthUnit,

    /// Circle area input unit
    pub area_input_unit: LengthUnit,

    /// Circle area output unit
    pub area_output_unit: AreaUnit,

    /// Circumference radius unit
    pub circumference_unit: LengthUnit,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            unit_system: UnitSystem::Millimeters,
            k_preset: KFactorPreset::MildSteel,
            length_from: LengthUnit::Millimeter,
            length_to: LengthUnit::Inch,
            area_input_unit: LengthUnit::Meter,
            area_output_unit: AreaUnit::SquareMeter,
            circumference_unit: LengthUnit::Millimeter,
        }
    }
}

impl CalculatorSettings {
    /// Parse settings from JSON text. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load settings from a JSON file.
pub fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    let settings = CalculatorSettings::from_json_str(&contents)?;
    debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = CalculatorSettings::from_json_str("{}").unwrap();
        assert_eq!(settings, CalculatorSettings::default());
    }

    #[test]
    fn test_partial_json() {
        let settings =
            CalculatorSettings::from_json_str(r#"{ "k_preset": "stainless", "area_output_unit": "in²" }"#).unwrap();
        assert_eq!(settings.k_preset, KFactorPreset::Stainless);
        assert_eq!(settings.area_output_unit, AreaUnit::SquareInch);
        assert_eq!(settings.unit_system, UnitSystem::Millimeters);
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let err = CalculatorSettings::from_json_str(r#"{ "unit_system": "furlong" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let err = load_settings(Path::new("/nonexistent/shopcalc/settings.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("shopcalc-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{ "unit_system": "in", "length_to": "ft" }"#).unwrap();
        let settings = load_settings(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(settings.unit_system, UnitSystem::Inches);
        assert_eq!(settings.length_to, LengthUnit::Foot);
    }
}

//! Forms for the live-recompute calculators.

use crate::calculations::{circle_area, circumference, length};
use crate::calculations::{
    CircleAreaInput, CircleAreaResult, CircumferenceInput, CircumferenceResult, LengthConversionInput,
    LengthConversionResult,
};
use crate::equations::geometry::MeasureType;
use crate::errors::CalcResult;
use crate::forms::{CalculatorForm, RecomputeMode};
use crate::numeric::parse_field;
use crate::settings::CalculatorSettings;
use crate::units::{AreaUnit, LengthUnit};

/// Length converter fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthConverterForm {
    pub value: String,
    pub from: LengthUnit,
    pub to: LengthUnit,
}

impl LengthConverterForm {
    pub fn with_settings(settings: &CalculatorSettings) -> Self {
        LengthConverterForm {
            value: String::new(),
            from: settings.length_from,
            to: settings.length_to,
        }
    }

    /// Exchange source and target units
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

impl Default for LengthConverterForm {
    fn default() -> Self {
        Self::with_settings(&CalculatorSettings::default())
    }
}

impl CalculatorForm for LengthConverterForm {
    type Output = LengthConversionResult;
    const DEFAULT_MODE: RecomputeMode = RecomputeMode::Live;

    fn derive(&self) -> CalcResult<Self::Output> {
        let input = LengthConversionInput {
            value: parse_field("value", &self.value)?,
            from: self.from,
            to: self.to,
        };
        length::calculate(&input)
    }

    fn has_any_input(&self) -> bool {
        !self.value.is_empty()
    }

    fn validation_message(&self) -> &'static str {
        "Value must be a number."
    }
}

/// Circle area fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleAreaForm {
    pub measure_type: MeasureType,
    pub value: String,
    pub input_unit: LengthUnit,
    pub output_unit: AreaUnit,
}

impl CircleAreaForm {
    pub fn with_settings(settings: &CalculatorSettings) -> Self {
        CircleAreaForm {
            measure_type: MeasureType::Radius,
            value: String::new(),
            input_unit: settings.area_input_unit,
            output_unit: settings.area_output_unit,
        }
    }
}

impl Default for CircleAreaForm {
    fn default() -> Self {
        Self::with_settings(&CalculatorSettings::default())
    }
}

impl CalculatorForm for CircleAreaForm {
    type Output = CircleAreaResult;
    const DEFAULT_MODE: RecomputeMode = RecomputeMode::Live;

    fn derive(&self) -> CalcResult<Self::Output> {
        let input = CircleAreaInput {
            measure_type: self.measure_type,
            value: parse_field(self.measure_type.label(), &self.value)?,
            input_unit: self.input_unit,
            output_unit: self.output_unit,
        };
        circle_area::calculate(&input)
    }

    fn has_any_input(&self) -> bool {
        !self.value.is_empty()
    }

    fn validation_message(&self) -> &'static str {
        "Value must be a non-negative number."
    }
}

/// Circumference fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CircumferenceForm {
    pub radius: String,
    pub unit: LengthUnit,
}

impl CircumferenceForm {
    pub fn with_settings(settings: &CalculatorSettings) -> Self {
        CircumferenceForm {
            radius: String::new(),
            unit: settings.circumference_unit,
        }
    }
}

impl Default for CircumferenceForm {
    fn default() -> Self {
        Self::with_settings(&CalculatorSettings::default())
    }
}

impl CalculatorForm for CircumferenceForm {
    type Output = CircumferenceResult;
    const DEFAULT_MODE: RecomputeMode = RecomputeMode::Live;

    fn derive(&self) -> CalcResult<Self::Output> {
        let input = CircumferenceInput {
            radius: parse_field("radius", &self.radius)?,
            unit: self.unit,
        };
        circumference::calculate(&input)
    }

    fn has_any_input(&self) -> bool {
        !self.radius.is_empty()
    }

    fn validation_message(&self) -> &'static str {
        "Enter a non-negative number."
    }
}

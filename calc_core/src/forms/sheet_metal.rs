//! Forms for the on-demand sheet-metal calculators.
//!
//! Both forms carry a unit system and a K-factor preset. Changing the unit
//! system rewrites every dimensional field in place; angles and K-factor are
//! unit-free and stay as typed.

use crate::calculations::{bend, flat_pattern};
use crate::calculations::{BendInput, BendResult, FlatPatternInput, FlatPatternResult, Segment};
use crate::equations::sheet_metal::{BendParameters, KFactorPreset};
use crate::errors::CalcResult;
use crate::forms::{convert_field_text, number_text, CalculatorForm, RecomputeMode};
use crate::numeric::{parse_field, parse_numeric_input};
use crate::settings::CalculatorSettings;
use crate::units::UnitSystem;

fn preset_text(preset: KFactorPreset) -> String {
    preset.k_factor().map(number_text).unwrap_or_default()
}

/// Bend allowance / bend deduction fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BendForm {
    pub angle_deg: String,
    pub inside_radius: String,
    pub thickness: String,
    pub k_factor: String,
    unit_system: UnitSystem,
    k_preset: KFactorPreset,
}

impl BendForm {
    pub fn with_settings(settings: &CalculatorSettings) -> Self {
        BendForm {
            angle_deg: String::new(),
            inside_radius: String::new(),
            thickness: String::new(),
            k_factor: preset_text(settings.k_preset),
            unit_system: settings.unit_system,
            k_preset: settings.k_preset,
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn k_preset(&self) -> KFactorPreset {
        self.k_preset
    }

    /// Switch unit systems, converting radius and thickness in place
    pub fn set_unit_system(&mut self, next: UnitSystem) {
        self.inside_radius = convert_field_text(&self.inside_radius, self.unit_system, next);
        self.thickness = convert_field_text(&self.thickness, self.unit_system, next);
        self.unit_system = next;
    }

    /// Pick a preset. A preset with a value overwrites the K-factor text.
    pub fn select_preset(&mut self, preset: KFactorPreset) {
        self.k_preset = preset;
        if let Some(k) = preset.k_factor() {
            self.k_factor = number_text(k);
        }
    }

    /// Parse every field
    pub fn parameters(&self) -> CalcResult<BendParameters> {
        Ok(BendParameters {
            angle_deg: parse_field("angle_deg", &self.angle_deg)?,
            inside_radius: parse_field("inside_radius", &self.inside_radius)?,
            thickness: parse_field("thickness", &self.thickness)?,
            k_factor: parse_field("k_factor", &self.k_factor)?,
        })
    }
}

impl Default for BendForm {
    fn default() -> Self {
        Self::with_settings(&CalculatorSettings::default())
    }
}

impl CalculatorForm for BendForm {
    type Output = BendResult;
    const DEFAULT_MODE: RecomputeMode = RecomputeMode::OnDemand;

    fn derive(&self) -> CalcResult<Self::Output> {
        let input = BendInput {
            params: self.parameters()?,
            unit_system: self.unit_system,
        };
        bend::calculate(&input)
    }

    fn has_any_input(&self) -> bool {
        [&self.angle_deg, &self.inside_radius, &self.thickness, &self.k_factor]
            .iter()
            .any(|text| !text.is_empty())
    }

    fn validation_message(&self) -> &'static str {
        "Ensure angle ∈ [0, 180], radius ≥ 0, thickness > 0, K ∈ [0, 1]."
    }
}

/// Which text field of a segment to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentField {
    Length,
    AngleDeg,
    InsideRadius,
}

/// Raw text of one flat-pattern segment. A blank radius means no override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentFields {
    pub length: String,
    pub angle_deg: String,
    pub inside_radius: String,
}

impl SegmentFields {
    pub fn new(length: impl Into<String>, angle_deg: impl Into<String>, inside_radius: impl Into<String>) -> Self {
        SegmentFields {
            length: length.into(),
            angle_deg: angle_deg.into(),
            inside_radius: inside_radius.into(),
        }
    }

    fn is_blank(&self) -> bool {
        self.length.is_empty() && self.angle_deg.is_empty() && self.inside_radius.is_empty()
    }

    fn to_segment(&self, number: usize) -> CalcResult<Segment> {
        let inside_radius = if self.inside_radius.trim().is_empty() {
            None
        } else {
            Some(parse_numeric_input(&self.inside_radius))
        };
        Ok(Segment {
            length: parse_field(&format!("segments[{number}].length"), &self.length)?,
            angle_deg: parse_field(&format!("segments[{number}].angle_deg"), &self.angle_deg)?,
            inside_radius,
        })
    }
}

/// Flat-pattern fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatPatternForm {
    pub thickness: String,
    pub default_inside_radius: String,
    pub k_factor: String,
    pub segments: Vec<SegmentFields>,
    unit_system: UnitSystem,
    k_preset: KFactorPreset,
}

impl FlatPatternForm {
    /// Form with a single blank segment
    pub fn with_settings(settings: &CalculatorSettings) -> Self {
        FlatPatternForm {
            thickness: String::new(),
            default_inside_radius: String::new(),
            k_factor: preset_text(settings.k_preset),
            segments: vec![SegmentFields::default()],
            unit_system: settings.unit_system,
            k_preset: settings.k_preset,
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn k_preset(&self) -> KFactorPreset {
        self.k_preset
    }

    /// Switch unit systems, converting thickness, default radius and every
    /// segment length and radius override in place
    pub fn set_unit_system(&mut self, next: UnitSystem) {
        let from = self.unit_system;
        self.thickness = convert_field_text(&self.thickness, from, next);
        self.default_inside_radius = convert_field_text(&self.default_inside_radius, from, next);
        for segment in &mut self.segments {
            segment.length = convert_field_text(&segment.length, from, next);
            segment.inside_radius = convert_field_text(&segment.inside_radius, from, next);
        }
        self.unit_system = next;
    }

    /// Pick a preset. A preset with a value overwrites the K-factor text.
    pub fn select_preset(&mut self, preset: KFactorPreset) {
        self.k_preset = preset;
        if let Some(k) = preset.k_factor() {
            self.k_factor = number_text(k);
        }
    }

    /// Append a blank segment
    pub fn add_segment(&mut self) {
        self.segments.push(SegmentFields::default());
    }

    /// Remove the segment at `index`, if present
    pub fn remove_segment(&mut self, index: usize) -> Option<SegmentFields> {
        (index < self.segments.len()).then(|| self.segments.remove(index))
    }

    /// Set one field of the segment at `index`. Returns false when out of range.
    pub fn update_segment(&mut self, index: usize, field: SegmentField, value: impl Into<String>) -> bool {
        let Some(segment) = self.segments.get_mut(index) else {
            return false;
        };
        let value = value.into();
        match field {
            SegmentField::Length => segment.length = value,
            SegmentField::AngleDeg => segment.angle_deg = value,
            SegmentField::InsideRadius => segment.inside_radius = value,
        }
        true
    }

    /// Parse every field into a calculator input
    pub fn to_input(&self) -> CalcResult<FlatPatternInput> {
        let default_inside_radius = if self.default_inside_radius.trim().is_empty() {
            None
        } else {
            Some(parse_field("default_inside_radius", &self.default_inside_radius)?)
        };
        let segments = self
            .segments
            .iter()
            .enumerate()
            .map(|(i, s)| s.to_segment(i + 1))
            .collect::<CalcResult<Vec<_>>>()?;

        Ok(FlatPatternInput {
            unit_system: self.unit_system,
            thickness: parse_field("thickness", &self.thickness)?,
            default_inside_radius,
            k_factor: parse_field("k_factor", &self.k_factor)?,
            segments,
        })
    }
}

impl Default for FlatPatternForm {
    fn default() -> Self {
        Self::with_settings(&CalculatorSettings::default())
    }
}

impl CalculatorForm for FlatPatternForm {
    type Output = FlatPatternResult;
    const DEFAULT_MODE: RecomputeMode = RecomputeMode::OnDemand;

    fn derive(&self) -> CalcResult<Self::Output> {
        flat_pattern::calculate(&self.to_input()?)
    }

    fn has_any_input(&self) -> bool {
        !self.thickness.is_empty()
            || !self.default_inside_radius.is_empty()
            || self.segments.iter().any(|s| !s.is_blank())
    }

    fn validation_message(&self) -> &'static str {
        "Ensure thickness > 0, radius ≥ 0 (global or per segment), lengths ≥ 0, angles ∈ [0, 180], K ∈ [0, 1]."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_bend_form() -> BendForm {
        let mut form = BendForm::default();
        form.angle_deg = "90".into();
        form.inside_radius = "1".into();
        form.thickness = "2".into();
        form.k_factor = "0.4".into();
        form
    }

    #[test]
    fn test_bend_form_defaults_to_mild_steel() {
        let form = BendForm::default();
        assert_eq!(form.k_preset(), KFactorPreset::MildSteel);
        assert_eq!(form.k_factor, "0.4");
        assert_eq!(form.unit_system(), UnitSystem::Millimeters);
    }

    #[test]
    fn test_unit_toggle_converts_dimensions_only() {
        let mut form = filled_bend_form();
        form.set_unit_system(UnitSystem::Inches);
        assert_eq!(parse_numeric_input(&form.inside_radius), 1.0 / 25.4);
        assert_eq!(parse_numeric_input(&form.thickness), 2.0 / 25.4);
        assert_eq!(form.angle_deg, "90");
        assert_eq!(form.k_factor, "0.4");

        form.set_unit_system(UnitSystem::Millimeters);
        assert!((parse_numeric_input(&form.thickness) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_toggle_inches_to_mm_multiplies() {
        let mut form = BendForm::with_settings(&CalculatorSettings {
            unit_system: UnitSystem::Inches,
            ..CalculatorSettings::default()
        });
        form.inside_radius = "0.5".into();
        form.thickness = "0.25".into();
        form.set_unit_system(UnitSystem::Millimeters);
        assert_eq!(form.inside_radius, "12.7");
        assert_eq!(form.thickness, "6.35");
    }

    #[test]
    fn test_unit_toggle_keeps_blank_fields() {
        let mut form = BendForm::default();
        form.thickness = "1.5".into();
        form.set_unit_system(UnitSystem::Inches);
        assert_eq!(form.inside_radius, "");
        assert_ne!(form.thickness, "1.5");
    }

    #[test]
    fn test_preset_fills_but_stays_editable() {
        let mut form = BendForm::default();
        form.select_preset(KFactorPreset::Aluminum);
        assert_eq!(form.k_factor, "0.33");

        form.k_factor = "0.42".into();
        assert_eq!(form.k_preset(), KFactorPreset::Aluminum);

        form.select_preset(KFactorPreset::None);
        assert_eq!(form.k_factor, "0.42");
    }

    #[test]
    fn test_bend_form_derive() {
        let result = filled_bend_form().derive().unwrap();
        // BA = (π/2)(1 + 0.4·2)
        assert!((result.bend_allowance - std::f64::consts::FRAC_PI_2 * 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_bend_form_blank_field_fails_parse() {
        let mut form = filled_bend_form();
        form.thickness.clear();
        assert_eq!(form.derive().unwrap_err().error_code(), "PARSE_FAILURE");
    }

    #[test]
    fn test_flat_form_segments() {
        let mut form = FlatPatternForm::default();
        form.thickness = "1".into();
        form.k_factor = "0.4".into();
        assert!(form.update_segment(0, SegmentField::Length, "10"));
        assert!(form.update_segment(0, SegmentField::AngleDeg, "0"));
        form.add_segment();
        form.update_segment(1, SegmentField::Length, "20");
        form.update_segment(1, SegmentField::AngleDeg, "90");
        form.update_segment(1, SegmentField::InsideRadius, "2");
        assert!(!form.update_segment(5, SegmentField::Length, "1"));

        let result = form.derive().unwrap();
        assert!((result.flat_length - 33.76991118430775).abs() < 1e-9, "flat = {}", result.flat_length);
        assert_eq!(result.per_bend[0].index, 2);
    }

    #[test]
    fn test_flat_form_remove_segment() {
        let mut form = FlatPatternForm::default();
        form.add_segment();
        assert_eq!(form.segments.len(), 2);
        assert!(form.remove_segment(1).is_some());
        assert!(form.remove_segment(3).is_none());
        assert_eq!(form.segments.len(), 1);
    }

    #[test]
    fn test_flat_form_unit_toggle() {
        let mut form = FlatPatternForm::default();
        form.thickness = "25.4".into();
        form.default_inside_radius = "".into();
        form.segments = vec![SegmentFields::new("50.8", "90", "12.7"), SegmentFields::new("", "45", "")];
        form.set_unit_system(UnitSystem::Inches);

        assert_eq!(form.thickness, "1");
        assert_eq!(form.default_inside_radius, "");
        assert_eq!(form.segments[0].length, "2");
        assert_eq!(form.segments[0].angle_deg, "90");
        assert_eq!(form.segments[0].inside_radius, "0.5");
        assert_eq!(form.segments[1].length, "");
        assert_eq!(form.segments[1].angle_deg, "45");
    }

    #[test]
    fn test_flat_form_any_input() {
        let mut form = FlatPatternForm::default();
        assert!(!form.has_any_input());
        form.update_segment(0, SegmentField::AngleDeg, "90");
        assert!(form.has_any_input());
    }
}

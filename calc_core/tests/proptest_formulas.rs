//! Property-based tests for conversions, formulas and the validation gates.
//!
//! Run with: cargo test -p calc_core -- proptest

use approx::assert_relative_eq;
use calc_core::calculations::bend::{self, BendInput};
use calc_core::calculations::flat_pattern::{self, FlatPatternInput, Segment};
use calc_core::equations::geometry::{circle_area, circumference};
use calc_core::equations::sheet_metal::{bend_allowance, bend_deduction, setback, validate_bend_parameters, BendParameters};
use calc_core::numeric::{format_number, parse_numeric_input};
use calc_core::units::{convert, convert_dimension, AreaUnit, LengthUnit, UnitSystem};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_length_unit() -> impl Strategy<Value = LengthUnit> {
    prop::sample::select(LengthUnit::ALL.to_vec())
}

fn arb_area_unit() -> impl Strategy<Value = AreaUnit> {
    prop::sample::select(AreaUnit::ALL.to_vec())
}

fn arb_unit_system() -> impl Strategy<Value = UnitSystem> {
    prop::sample::select(UnitSystem::ALL.to_vec())
}

/// Parameters that pass the bend validation gate
fn arb_valid_bend() -> impl Strategy<Value = BendParameters> {
    (0.0..=180.0f64, 0.0..50.0f64, 0.01..20.0f64, 0.0..=1.0f64).prop_map(|(angle_deg, inside_radius, thickness, k_factor)| {
        BendParameters {
            angle_deg,
            inside_radius,
            thickness,
            k_factor,
        }
    })
}

/// Any f64, including NaN and the infinities
fn arb_any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop::num::f64::ANY,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        Just(0.0),
        Just(-0.0),
    ]
}

// =============================================================================
// Unit conversion
// =============================================================================

proptest! {
    #[test]
    fn proptest_length_identity(value in -1e9..1e9f64, unit in arb_length_unit()) {
        prop_assert_eq!(convert(value, unit, unit), value);
    }

    #[test]
    fn proptest_length_round_trip(value in -1e9..1e9f64, from in arb_length_unit(), to in arb_length_unit()) {
        let back = convert(convert(value, from, to), to, from);
        assert_relative_eq!(back, value, max_relative = 1e-9, epsilon = 1e-12);
    }

    #[test]
    fn proptest_area_round_trip(value in 0.0..1e9f64, from in arb_area_unit(), to in arb_area_unit()) {
        let back = convert(convert(value, from, to), to, from);
        assert_relative_eq!(back, value, max_relative = 1e-9, epsilon = 1e-12);
    }

    #[test]
    fn proptest_dimension_round_trip(value in 0.0..1e6f64, from in arb_unit_system(), to in arb_unit_system()) {
        let back = convert_dimension(convert_dimension(value, from, to), to, from);
        assert_relative_eq!(back, value, max_relative = 1e-9, epsilon = 1e-12);
    }

    #[test]
    fn proptest_non_finite_converts_to_nan(value in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
                                           from in arb_length_unit(), to in arb_length_unit()) {
        prop_assert!(convert(value, from, to).is_nan());
    }
}

// =============================================================================
// Geometry
// =============================================================================

proptest! {
    #[test]
    fn proptest_circle_area_is_pi_r_squared(r in 0.0..1e6f64) {
        let area = circle_area(r);
        prop_assert!(area >= 0.0);
        assert_relative_eq!(area, std::f64::consts::PI * r * r, max_relative = 1e-12);
    }

    #[test]
    fn proptest_circumference_is_two_pi_r(r in 0.0..1e6f64) {
        assert_relative_eq!(circumference(r), 2.0 * std::f64::consts::PI * r, max_relative = 1e-12);
    }

    #[test]
    fn proptest_negative_radius_is_nan(r in -1e6..-1e-9f64) {
        prop_assert!(circle_area(r).is_nan());
        prop_assert!(circumference(r).is_nan());
    }
}

// =============================================================================
// Sheet metal
// =============================================================================

proptest! {
    #[test]
    fn proptest_right_angle_setback_is_radius_plus_thickness(params in arb_valid_bend()) {
        let params = BendParameters { angle_deg: 90.0, ..params };
        let expected = params.inside_radius + params.thickness;
        assert_relative_eq!(setback(&params), expected, max_relative = 1e-12);
        assert_relative_eq!(bend_deduction(&params), 2.0 * expected - bend_allowance(&params), epsilon = 1e-9);
    }

    #[test]
    fn proptest_bend_allowance_non_negative(params in arb_valid_bend()) {
        prop_assert!(bend_allowance(&params) >= 0.0);
    }

    #[test]
    fn proptest_bend_gate_never_panics(angle_deg in arb_any_f64(), inside_radius in arb_any_f64(),
                                       thickness in arb_any_f64(), k_factor in arb_any_f64()) {
        let params = BendParameters { angle_deg, inside_radius, thickness, k_factor };
        let input = BendInput { params, unit_system: UnitSystem::Millimeters };
        match bend::calculate(&input) {
            Ok(result) => {
                prop_assert!(validate_bend_parameters(&params));
                prop_assert!(result.bend_allowance.is_finite());
            }
            Err(err) => {
                prop_assert!(!validate_bend_parameters(&params));
                prop_assert_eq!(err.error_code(), "INVALID_INPUT");
            }
        }
    }

    #[test]
    fn proptest_flat_length_is_sum_of_parts(
        lengths in prop::collection::vec(0.0..500.0f64, 1..8),
        angles in prop::collection::vec(0.0..=180.0f64, 8),
        thickness in 0.1..10.0f64,
        k_factor in 0.0..=1.0f64,
        radius in 0.0..20.0f64,
    ) {
        let segments: Vec<Segment> = lengths
            .iter()
            .zip(&angles)
            .map(|(&length, &angle)| Segment::bent(length, angle))
            .collect();
        let input = FlatPatternInput {
            unit_system: UnitSystem::Millimeters,
            thickness,
            default_inside_radius: Some(radius),
            k_factor,
            segments,
        };
        let result = flat_pattern::calculate(&input).unwrap();

        let straight: f64 = lengths.iter().sum();
        assert_relative_eq!(result.sum_straight, straight, max_relative = 1e-12, epsilon = 1e-12);
        assert_relative_eq!(result.flat_length, result.sum_straight + result.sum_bend_allowance, max_relative = 1e-12);
        let per_bend_sum: f64 = result.per_bend.iter().map(|b| b.bend_allowance).sum();
        assert_relative_eq!(per_bend_sum, result.sum_bend_allowance, max_relative = 1e-12, epsilon = 1e-12);
    }
}

// =============================================================================
// Parsing and formatting
// =============================================================================

proptest! {
    #[test]
    fn proptest_format_never_panics(value in arb_any_f64(), digits in 0usize..30) {
        let _ = format_number(value, digits);
    }

    #[test]
    fn proptest_format_reads_back_close(value in -1e6..1e6f64, digits in 0usize..8) {
        let text = format_number(value, digits);
        let back: f64 = text.parse().unwrap();
        prop_assert!((back - value).abs() <= 0.5 * 10f64.powi(-(digits as i32)) + 1e-9,
            "{} formatted as {}", value, text);
    }

    #[test]
    fn proptest_parse_never_panics(text in ".{0,24}") {
        let _ = parse_numeric_input(&text);
    }

    #[test]
    fn proptest_parse_reads_display(value in -1e12..1e12f64) {
        prop_assert_eq!(parse_numeric_input(&value.to_string()), value);
    }
}

//! # Engineering Equations
//!
//! The raw formulas behind the calculators, kept apart from input parsing
//! and validation so each one can be checked against its reference form.
//!
//! ## Modules
//!
//! - [`geometry`] - Circle area and circumference
//! - [`sheet_metal`] - Bend allowance, setback, bend deduction and K-factor presets
//!
//! ## Conventions
//!
//! - **Angles**: Bend angles are in degrees, measured as the angle bent
//!   through (0° = flat, 90° = right-angle flange)
//! - **Lengths**: Any consistent length unit; formulas never convert
//! - **Invalid input**: Formulas return `NaN` rather than panicking; the
//!   validation gates in [`crate::calculations`] keep NaN out of results

pub mod geometry;
pub mod sheet_metal;

pub use geometry::{circle_area, circumference, radius_from_measurement, MeasureType};
pub use sheet_metal::{
    arc_length, bend_allowance, bend_deduction, setback, validate_bend_parameters, BendParameters, KFactorPreset,
    MAX_BEND_ANGLE_DEG,
};

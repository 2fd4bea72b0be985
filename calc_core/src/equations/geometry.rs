//! # Circle Geometry Formulas
//!
//! Closed-form circle measurements. Each formula is defined only for a finite,
//! non-negative radius and returns NaN otherwise; none of them panic.
//!
//! ## Notation
//!
//! - `r` = Radius
//! - `d` = Diameter
//! - `A` = Area
//! - `C` = Circumference

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Which circle dimension a measured value represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureType {
    #[default]
    Radius,
    Diameter,
}

impl MeasureType {
    /// Label for the measured quantity
    pub fn label(self) -> &'static str {
        match self {
            MeasureType::Radius => "radius",
            MeasureType::Diameter => "diameter",
        }
    }
}

fn radius_in_domain(r: f64) -> bool {
    r.is_finite() && r >= 0.0
}

/// Calculate the area of a circle
///
/// ```text
///        .---.
///      /   r   \
///     |    •───|
///      \       /
///        '---'
/// ```
///
/// # Formula
/// A = π × r²
///
/// # Returns
/// Area in square units of `r`, or NaN when `r` is negative or non-finite
///
/// # Example
/// ```rust
/// use calc_core::equations::geometry::circle_area;
///
/// assert_eq!(circle_area(2.0), std::f64::consts::PI * 4.0);
/// assert!(circle_area(-1.0).is_nan());
/// ```
#[inline]
pub fn circle_area(r: f64) -> f64 {
    if !radius_in_domain(r) {
        return f64::NAN;
    }
    PI * r * r
}

/// Calculate the circumference of a circle
///
/// # Formula
/// C = 2 × π × r
///
/// # Returns
/// Circumference in units of `r`, or NaN when `r` is negative or non-finite
#[inline]
pub fn circumference(r: f64) -> f64 {
    if !radius_in_domain(r) {
        return f64::NAN;
    }
    2.0 * PI * r
}

/// Radius from a measured value. A diameter is halved.
#[inline]
pub fn radius_from_measurement(value: f64, measure: MeasureType) -> f64 {
    match measure {
        MeasureType::Radius => value,
        MeasureType::Diameter => value / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area_exact() {
        for r in [0.0, 0.5, 1.0, 3.0, 1234.5] {
            assert_eq!(circle_area(r), PI * r * r, "A({})", r);
        }
    }

    #[test]
    fn test_circle_area_domain() {
        assert!(circle_area(-0.001).is_nan());
        assert!(circle_area(f64::NAN).is_nan());
        assert!(circle_area(f64::INFINITY).is_nan());
        assert_eq!(circle_area(0.0), 0.0);
    }

    #[test]
    fn test_circumference() {
        assert_eq!(circumference(1.0), 2.0 * PI);
        assert_eq!(circumference(0.0), 0.0);
        assert!(circumference(-2.0).is_nan());
    }

    #[test]
    fn test_radius_from_measurement() {
        assert_eq!(radius_from_measurement(10.0, MeasureType::Radius), 10.0);
        assert_eq!(radius_from_measurement(10.0, MeasureType::Diameter), 5.0);
    }
}

//! Small scalar helpers shared across modules.

/// Clamp `value` into `[min, max]`.
///
/// Works for any partially ordered scalar. An unordered value (NaN) is
/// returned unchanged.
///
/// ```rust
/// use calc_core::math::clamp;
///
/// assert_eq!(clamp(12, 0, 10), 10);
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// ```
pub fn clamp<T: PartialOrd + Copy>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

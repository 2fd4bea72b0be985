//! # Numeric Parsing & Formatting
//!
//! Turns free-form field text into `f64` values and back into fixed-precision
//! display strings.
//!
//! Parsing is deliberately lenient: the longest leading numeric prefix is
//! read and anything after it is ignored, so `"12abc"` reads as `12`. Text
//! with no numeric prefix reads as NaN, which the validity checks reject.
//!
//! Formatting rounds half away from zero on the exact binary value of the
//! input, so `1.23456` at 4 digits is `"1.2346"` while `1.005` at 2 digits is
//! `"1.00"` (the stored double is slightly below 1.005).
//!
//! ```rust
//! use calc_core::numeric::{format_number, is_valid_number, parse_numeric_input};
//!
//! let x = parse_numeric_input("  3.5 mm");
//! assert_eq!(x, 3.5);
//! assert!(!is_valid_number(parse_numeric_input("mm")));
//! assert_eq!(format_number(x, 2), "3.50");
//! ```

use crate::errors::{CalcError, CalcResult};
use crate::math::clamp;

/// Fraction digits used by [`format_default`]
pub const DEFAULT_FRACTION_DIGITS: usize = 4;

/// Upper bound on requested fraction digits
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Enough fraction digits to print any finite f64 exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Parse the leading numeric prefix of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign, decimal digits
/// with an optional fraction, an optional exponent, or `Infinity`. Returns NaN
/// when no prefix matches.
pub fn parse_numeric_input(text: &str) -> f64 {
    let prefix = numeric_prefix(text.trim_start());
    if prefix.is_empty() {
        return f64::NAN;
    }
    prefix.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse a named field, failing unless the text yields a finite number.
pub fn parse_field(field: &str, text: &str) -> CalcResult<f64> {
    let value = parse_numeric_input(text);
    if is_valid_number(value) {
        Ok(value)
    } else {
        Err(CalcError::parse_failure(field, text))
    }
}

/// True iff `value` is finite (rejects NaN and both infinities).
pub fn is_valid_number(value: f64) -> bool {
    value.is_finite()
}

/// True iff `value` is finite and `min <= value <= max`.
pub fn is_in_range(value: f64, min: f64, max: f64) -> bool {
    value.is_finite() && value >= min && value <= max
}

/// Format with [`DEFAULT_FRACTION_DIGITS`] fraction digits.
pub fn format_default(value: f64) -> String {
    format_number(value, DEFAULT_FRACTION_DIGITS)
}

/// Fixed-point format with `digits` fraction digits.
///
/// `digits` is capped at [`MAX_FRACTION_DIGITS`]; larger requests print
/// exactly that many fraction digits.
///
/// Returns an empty string for non-finite input. Callers check validity
/// before display rather than testing for the empty string.
pub fn format_number(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let digits = clamp(digits, 0, MAX_FRACTION_DIGITS);

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up && !increment_decimal(&mut kept) {
        kept.insert(0, b'1');
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&b| b as char));
    }
    out
}

/// Add one to the last digit, carrying left. Returns false on overflow
/// past the most significant digit.
fn increment_decimal(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return true;
        }
    }
    false
}

/// Longest prefix of `s` that reads as a decimal number.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }
    if s[i..].starts_with("Infinity") {
        return &s[..i + "Infinity".len()];
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < len && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - i - 1;
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    &s[..i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_numeric_input("42"), 42.0);
        assert_eq!(parse_numeric_input("-3.25"), -3.25);
        assert_eq!(parse_numeric_input("+0.5"), 0.5);
        assert_eq!(parse_numeric_input(".5"), 0.5);
        assert_eq!(parse_numeric_input("7."), 7.0);
        assert_eq!(parse_numeric_input("2.5e-3"), 0.0025);
    }

    #[test]
    fn test_parse_lenient_prefix() {
        assert_eq!(parse_numeric_input("12abc"), 12.0);
        assert_eq!(parse_numeric_input("  3.5 mm"), 3.5);
        assert_eq!(parse_numeric_input("1e"), 1.0);
        assert_eq!(parse_numeric_input("1e+"), 1.0);
        assert_eq!(parse_numeric_input("1e3x"), 1000.0);
        assert_eq!(parse_numeric_input("0x10"), 0.0);
        assert_eq!(parse_numeric_input("1.2.3"), 1.2);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_numeric_input("").is_nan());
        assert!(parse_numeric_input("abc").is_nan());
        assert!(parse_numeric_input("-").is_nan());
        assert!(parse_numeric_input(".").is_nan());
        assert!(parse_numeric_input("mm 12").is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_numeric_input("Infinity"), f64::INFINITY);
        assert_eq!(parse_numeric_input("-Infinityx"), f64::NEG_INFINITY);
        assert!(!is_valid_number(parse_numeric_input("Infinity")));
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("radius", "2.5"), Ok(2.5));
        let err = parse_field("radius", "").unwrap_err();
        assert_eq!(err.error_code(), "PARSE_FAILURE");
        assert!(parse_field("radius", "Infinity").is_err());
    }

    #[test]
    fn test_validity_checks() {
        assert!(is_valid_number(0.0));
        assert!(!is_valid_number(f64::NAN));
        assert!(!is_valid_number(f64::NEG_INFINITY));
        assert!(is_in_range(0.0, 0.0, 1.0));
        assert!(is_in_range(1.0, 0.0, 1.0));
        assert!(!is_in_range(1.0001, 0.0, 1.0));
        assert!(!is_in_range(f64::NAN, 0.0, 1.0));
    }

    #[test]
    fn test_format_non_finite_is_empty() {
        assert_eq!(format_number(f64::NAN, 4), "");
        assert_eq!(format_number(f64::INFINITY, 4), "");
        assert_eq!(format_default(f64::NEG_INFINITY), "");
    }

    #[test]
    fn test_format_rounding() {
        assert_eq!(format_number(1.23456, 4), "1.2346");
        assert_eq!(format_default(2.0), "2.0000");
        assert_eq!(format_number(0.5, 0), "1");
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(-2.5, 0), "-3");
        assert_eq!(format_number(9.9996, 3), "10.000");
        assert_eq!(format_number(999.95, 0), "1000");
    }

    #[test]
    fn test_format_uses_exact_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format_number(1.005, 2), "1.00");
        // 0.125 is exact, so the tie rounds away from zero
        assert_eq!(format_number(0.125, 2), "0.13");
    }

    #[test]
    fn test_format_sign_handling() {
        assert_eq!(format_number(-0.0, 2), "0.00");
        assert_eq!(format_number(-0.0001, 2), "-0.00");
        assert_eq!(format_number(-1.5, 1), "-1.5");
    }

    #[test]
    fn test_format_large_values() {
        assert_eq!(format_number(1609.34, 2), "1609.34");
        assert_eq!(format_number(1e15, 1), "1000000000000000.0");
    }

    #[test]
    fn test_format_digit_cap() {
        let third = format_number(1.0 / 3.0, 25);
        assert_eq!(third.len(), "0.".len() + 25);
        assert!(third.starts_with("0.3333333333333333"), "{}", third);

        let capped = format_number(0.1, 150);
        assert_eq!(capped.len(), "0.".len() + MAX_FRACTION_DIGITS);
    }
}

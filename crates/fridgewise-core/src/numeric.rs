// ABOUTME: Lenient numeric parsing for reference-table cells and label captures
// ABOUTME: Reads the leading number of a string and ignores trailing unit text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgewise Contributors

//! Lenient number parsing.
//!
//! Government CSV exports and label text carry cells such as `"12.5"`,
//! `"12.5mg"`, `" 3"`, `"-"` or `""`. A cell is numeric when it starts (after
//! leading whitespace) with a decimal number; the remainder is ignored. Callers
//! decide what "not numeric" means for them: skip, or treat as zero.

/// Parse the leading decimal number of `text`.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Returns `None` when no digit starts the text.
#[must_use]
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

/// Parse the leading decimal number of `text`, defaulting to zero.
#[must_use]
pub fn parse_f64_or_zero(text: &str) -> f64 {
    parse_leading_f64(text).unwrap_or(0.0)
}

/// Parse the leading unsigned integer of `text`.
///
/// Returns `None` when the text does not start with a digit; saturates at
/// `u32::MAX` on overflow.
#[must_use]
pub fn parse_leading_u32(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let digit_count = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }
    Some(trimmed[..digit_count].parse::<u32>().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number_with_unit_suffix() {
        assert_eq!(parse_leading_f64("12.5mg"), Some(12.5));
        assert_eq!(parse_leading_f64("  -3 g"), Some(-3.0));
        assert_eq!(parse_leading_f64(".5"), Some(0.5));
        assert_eq!(parse_leading_f64("1e3kcal"), Some(1000.0));
        assert_eq!(parse_leading_f64("7e"), Some(7.0));
    }

    #[test]
    fn test_non_numeric_text() {
        assert_eq!(parse_leading_f64(""), None);
        assert_eq!(parse_leading_f64("-"), None);
        assert_eq!(parse_leading_f64("abc"), None);
        assert!(parse_f64_or_zero("tr").abs() < f64::EPSILON);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(parse_leading_u32("31"), Some(31));
        assert_eq!(parse_leading_u32("3.5"), Some(3));
        assert_eq!(parse_leading_u32(".5"), None);
        assert_eq!(parse_leading_u32("99999999999"), Some(u32::MAX));
    }
}

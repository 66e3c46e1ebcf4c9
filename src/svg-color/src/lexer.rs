//! Numeric tokens inside functional colour notation.
//!
//! Parsing is locale-invariant: the decimal point is always `.` and grouping
//! separators are never accepted. Only malformed text is rejected; magnitudes
//! too large for the target type saturate, and the conversion helpers at the
//! bottom of this module clamp them into range.

use std::str::FromStr;

use crate::error::FormatFault;

/// One trimmed argument of `rgb(...)` / `hsl(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    percent: bool,
}

impl<'a> Token<'a> {
    /// Wraps an already-trimmed argument. A single trailing `%` marks the
    /// token as a percentage.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            percent: text.ends_with('%'),
        }
    }

    /// The argument exactly as written.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Whether the argument carries a trailing `%`.
    pub fn is_percent(&self) -> bool {
        self.percent
    }

    /// The numeric part, with one trailing `%` removed.
    pub fn magnitude(&self) -> &'a str {
        if self.percent {
            &self.text[..self.text.len() - 1]
        } else {
            self.text
        }
    }

    /// Parses the magnitude as a base-10 integer.
    pub fn integer(&self) -> Result<i64, FormatFault> {
        parse_integer(self.magnitude())
    }

    /// Parses the magnitude as a decimal number.
    pub fn decimal(&self) -> Result<f64, FormatFault> {
        parse_decimal(self.magnitude())
    }

    /// Parses the magnitude as a single-precision decimal.
    pub fn single(&self) -> Result<f32, FormatFault> {
        parse_decimal(self.magnitude())
    }
}

/// Parses `[+-]digits`. Values outside `i64` saturate toward their sign.
pub fn parse_integer(text: &str) -> Result<i64, FormatFault> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatFault::InvalidNumber(text.to_string()));
    }
    Ok(text.parse::<i64>().unwrap_or(if text.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// Parses `[+-]digits[.digits][(e|E)[+-]digits]`; either side of the point
/// may be empty but not both.
///
/// A well-formed literal too large for `T` comes back as an infinity of the
/// matching sign.
pub fn parse_decimal<T: FromStr>(text: &str) -> Result<T, FormatFault> {
    if !is_decimal_literal(text) {
        return Err(FormatFault::InvalidNumber(text.to_string()));
    }
    text.parse::<T>()
        .map_err(|_| FormatFault::InvalidNumber(text.to_string()))
}

fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let mut digits = skip_digits(bytes, &mut i);
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        digits += skip_digits(bytes, &mut i);
    }
    if digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if skip_digits(bytes, &mut i) == 0 {
            return false;
        }
    }

    i == bytes.len()
}

fn skip_digits(bytes: &[u8], i: &mut usize) -> usize {
    let start = *i;
    while bytes.get(*i).is_some_and(u8::is_ascii_digit) {
        *i += 1;
    }
    *i - start
}

// ============================================================================
// Magnitude to byte conversion
// ============================================================================

/// Rounds half to even and saturates into a byte.
pub fn round_to_byte(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Integer channel: saturate into `0..=255`.
pub fn channel_from_integer(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Percentage channel: `round(255 * clamp(pct, 0, 100) / 100)`.
///
/// The product is taken in single precision before rounding, so values that
/// land on a half in `f32` round the same way every time.
pub fn channel_from_percent(pct: f32) -> u8 {
    let scaled = 255.0_f32 * pct.clamp(0.0, 100.0) / 100.0;
    round_to_byte(f64::from(scaled))
}

/// Alpha: values up to 1 are fractions of 255, larger values are already
/// scaled.
pub fn alpha_from_decimal(value: f64) -> u8 {
    if value <= 1.0 {
        round_to_byte(value.clamp(0.0, 1.0) * 255.0)
    } else {
        round_to_byte(value.clamp(0.0, 255.0))
    }
}

//! Decimal digit-string helpers shared by the checksum engine, the validator
//! and the generator.
//!
//! PANs are handled as `&str` on the public surface; internally the engines
//! work on digit values (`0..=9`) so the arithmetic stays on small integers.

/// Numeric value of an ASCII decimal digit, or `None` for anything else.
pub fn digit_value(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

/// Convert a digit string to digit values. Returns `None` if any character
/// is not an ASCII decimal digit.
pub fn to_digits(s: &str) -> Option<Vec<u8>> {
    s.chars().map(digit_value).collect()
}

/// Render digit values back into a string.
///
/// Values outside `0..=9` are a caller bug and are not checked here.
pub fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

// cardutils/src/checksum.rs

//! Luhn mod-10 checksum.

use crate::utils::to_digits;

/// Weighted Luhn sum of a payload (the digits in front of the control digit),
/// reduced mod 10. Starting from the rightmost payload digit, every second
/// digit is doubled and reduced by 9 when it exceeds 9.
///
/// The running total stays below 10, so payload length is unbounded.
pub(crate) fn luhn_residue(payload: &[u8]) -> u8 {
    payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .fold(0u8, |acc, d| (acc + d) % 10)
}

/// Control digit that completes `payload` digit values.
pub(crate) fn control_digit_for(payload: &[u8]) -> u8 {
    (10 - luhn_residue(payload)) % 10
}

/// Compute the Luhn control digit for a payload digit string.
/// Returns `None` when the payload contains a non-digit character.
pub fn luhn_control_digit(payload: &str) -> Option<u8> {
    to_digits(payload).map(|digits| control_digit_for(&digits))
}

/// Luhn check over digit values; the last value is the control digit.
pub(crate) fn luhn_valid_digits(digits: &[u8]) -> bool {
    match digits.split_last() {
        Some((&control, payload)) if !payload.is_empty() => control_digit_for(payload) == control,
        _ => false,
    }
}

/// Luhn mod-10 check. The last character is the control digit.
///
/// Any non-digit character, or fewer than two characters, yields `false`.
pub fn luhn_check(pan: &str) -> bool {
    to_digits(pan).is_some_and(|digits| luhn_valid_digits(&digits))
}

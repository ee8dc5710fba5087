// cardutils/src/validate.rs

//! Structural PAN validation: global length band, scheme length, Luhn.

use crate::checksum::control_digit_for;
use crate::classify::get_card_scheme;
use crate::constants::{MAX_VALID_PAN_LENGTH, MIN_VALID_PAN_LENGTH};
use crate::scheme::{Scheme, length_check_for_scheme};
use crate::utils::digit_value;
use crate::{Error, Result};

/// Validate a PAN and return its scheme, or the first failing check.
///
/// Checks run in order:
/// 1. length within 14..=19
/// 2. length accepted by the classified scheme
/// 3. all characters are digits and the Luhn control digit matches
///
/// The band check comes first, so a 13-digit Visa is rejected even though
/// Visa issues 13-digit PANs.
pub fn validate(pan: &str) -> Result<Scheme> {
    let length = pan.len();
    if !(MIN_VALID_PAN_LENGTH..=MAX_VALID_PAN_LENGTH).contains(&length) {
        return Err(Error::LengthOutOfRange {
            min: MIN_VALID_PAN_LENGTH,
            max: MAX_VALID_PAN_LENGTH,
            actual: length,
        });
    }

    let scheme = get_card_scheme(pan);
    if !length_check_for_scheme(scheme, length) {
        return Err(Error::SchemeLength { scheme, length });
    }

    let digits = pan
        .chars()
        .enumerate()
        .map(|(position, character)| {
            digit_value(character).ok_or(Error::InvalidCharacter {
                position,
                character,
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    // length >= 14 here, so split_last always yields a non-empty payload
    if let Some((&actual, payload)) = digits.split_last() {
        let expected = control_digit_for(payload);
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }
    }

    Ok(scheme)
}

/// Whether the PAN is structurally valid: right length for its scheme and a
/// passing Luhn check. Malformed input is simply `false`.
pub fn validity_check(pan: &str) -> bool {
    validate(pan).is_ok()
}

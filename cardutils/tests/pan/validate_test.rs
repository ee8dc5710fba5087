#[path = "../common/mod.rs"]
mod common;

use cardutils::test_support::{corrupt_control_digit, replace_digit};
use cardutils::{Error, Scheme, luhn_check, validate, validity_check};

#[test]
fn validity_reference_cases() {
    assert!(validity_check("5300000000000006"));
    assert!(!validity_check("5300000000000000"));
    assert!(!validity_check("1234567890123"));
    assert!(!validity_check("530000XXXXXX0000"));
}

#[test]
fn valid_samples_validate_to_their_scheme() {
    for (pan, scheme) in common::valid_samples() {
        assert_eq!(validate(pan), Ok(scheme), "{pan}");
        assert!(luhn_check(pan));
    }
}

#[test]
fn corrupted_samples_fail_checksum() {
    for (pan, _) in common::valid_samples() {
        let bad = corrupt_control_digit(pan);
        assert!(matches!(
            validate(&bad),
            Err(Error::ChecksumMismatch { .. })
        ));
        assert!(!validity_check(&bad));
    }
}

#[test]
fn non_digit_reports_position() {
    let bad = replace_digit("4111111111111111", 9, '-');
    assert_eq!(
        validate(&bad),
        Err(Error::InvalidCharacter {
            position: 9,
            character: '-'
        })
    );
}

#[test]
fn malformed_samples_are_false() {
    for pan in common::malformed_samples() {
        assert!(!validity_check(pan), "{pan:?}");
        assert!(validate(pan).is_err());
    }
}

#[test]
fn bp_card_needs_nineteen_digits() {
    // 16 digit BP prefix is classified but rejected on length
    assert_eq!(
        validate("7052000000000009"),
        Err(Error::SchemeLength {
            scheme: Scheme::BPCard,
            length: 16
        })
    );
}

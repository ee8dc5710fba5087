#[path = "../common/mod.rs"]
mod common;

use cardutils::{mask_pan, mask_pan_with_character};

#[test]
fn mask_reference_cases() {
    assert_eq!(mask_pan("123456789"), "123456789");
    assert_eq!(mask_pan("5300000000000000"), "530000******0000");
    assert_eq!(mask_pan("53000000000000001"), "530000*******0001");
    assert_eq!(
        mask_pan_with_character("5300000000000000", 'X'),
        "530000XXXXXX0000"
    );
    assert_eq!(
        mask_pan_with_character("53000000000000001", 'Z'),
        "530000ZZZZZZZ0001"
    );
}

#[test]
fn mask_keeps_length_and_edges() {
    for (pan, _) in common::valid_samples() {
        let masked = mask_pan(pan);
        assert_eq!(masked.len(), pan.len());
        assert_eq!(&masked[..6], &pan[..6]);
        assert_eq!(&masked[masked.len() - 4..], &pan[pan.len() - 4..]);
        assert_eq!(masked.matches('*').count(), pan.len() - 10);
    }
}

#[test]
fn mask_twice_is_mask_once() {
    for (pan, _) in common::valid_samples() {
        let once = mask_pan_with_character(pan, 'Z');
        assert_eq!(mask_pan_with_character(&once, 'Z'), once);
    }
}

#[test]
fn mask_malformed_never_panics() {
    for pan in common::malformed_samples() {
        let _ = mask_pan(pan);
    }
}

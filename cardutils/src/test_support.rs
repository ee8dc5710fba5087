//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize deterministic generator setup and a few PAN
//! mutations so tests across the crate and the tests/ directory can reuse
//! the same logic.
#![allow(dead_code)]

use crate::generator::PanGenerator;
use rand::rngs::StdRng;

/// Seed used when a test does not care which PANs it gets, only that they
/// are reproducible.
#[doc(hidden)]
pub const DEFAULT_TEST_SEED: u64 = 0x5eed_ca4d;

/// Deterministic generator for tests and benches.
#[doc(hidden)]
pub fn seeded_generator(seed: u64) -> PanGenerator<StdRng> {
    PanGenerator::seeded(seed)
}

/// Replace the control digit with the next digit (mod 10), which always
/// breaks the Luhn check of a valid PAN.
#[doc(hidden)]
pub fn corrupt_control_digit(pan: &str) -> String {
    let mut bytes = pan.as_bytes().to_vec();
    if let Some(last) = bytes.last_mut() {
        if last.is_ascii_digit() {
            *last = b'0' + (*last - b'0' + 1) % 10;
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Replace the character at `position`; out of range positions are a no-op.
#[doc(hidden)]
pub fn replace_digit(pan: &str, position: usize, character: char) -> String {
    pan.chars()
        .enumerate()
        .map(|(i, c)| if i == position { character } else { c })
        .collect()
}

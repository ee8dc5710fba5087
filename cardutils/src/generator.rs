// cardutils/src/generator.rs

//! Random, Luhn-valid PAN generation for tests and demos.
//!
//! [`PanGenerator`] owns its random source. Use [`PanGenerator::seeded`] for
//! reproducible output, [`PanGenerator::with_rng`] to plug in any
//! [`rand::Rng`], or (with the `std` feature) [`PanGenerator::new`] and the
//! free functions, which borrow the thread-local RNG.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::checksum::luhn_valid_digits;
use crate::classify::rule_for;
use crate::constants::{
    DEFAULT_PAN_LENGTH, MAX_VALID_PAN_LENGTH, MIN_GENERATED_PAN_LENGTH, MIN_VALID_PAN_LENGTH,
    UNCLASSIFIED_LEADING_DIGITS,
};
use crate::mask::mask_pan;
use crate::scheme::Scheme;
use crate::utils::digits_to_string;
use crate::{Error, Result};

/// PAN generator backed by an explicitly owned RNG.
#[derive(Debug, Clone)]
pub struct PanGenerator<R> {
    rng: R,
}

#[cfg(feature = "std")]
impl PanGenerator<rand::rngs::ThreadRng> {
    /// Generator over the thread-local RNG. Seeded once per thread by `rand`.
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

#[cfg(feature = "std")]
impl Default for PanGenerator<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PanGenerator<StdRng> {
    /// Deterministic generator: the same seed yields the same PANs.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PanGenerator<R> {
    /// Generator over a caller supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Random Luhn-valid PAN of exactly `length` digits. No scheme is
    /// implied; the leading digits are random.
    pub fn pan_of_length(&mut self, length: usize) -> Result<String> {
        if length < MIN_GENERATED_PAN_LENGTH {
            return Err(Error::PanTooShort {
                minimum: MIN_GENERATED_PAN_LENGTH,
                actual: length,
            });
        }

        let mut digits = Vec::with_capacity(length);
        self.fill_random(&mut digits, length - 1);
        let pan = complete_with_control_digit(digits);
        debug!("generated {}-digit pan {}", length, mask_pan(&pan));
        Ok(pan)
    }

    /// Random Luhn-valid 16-digit PAN.
    pub fn pan(&mut self) -> String {
        let mut digits = Vec::with_capacity(DEFAULT_PAN_LENGTH);
        self.fill_random(&mut digits, DEFAULT_PAN_LENGTH - 1);
        let pan = complete_with_control_digit(digits);
        debug!("generated {}-digit pan {}", DEFAULT_PAN_LENGTH, mask_pan(&pan));
        pan
    }

    /// Random PAN that classifies as `scheme`, has a length valid for it and
    /// passes `validity_check`.
    ///
    /// For `Scheme::Unknown` the PAN starts with a digit no rule matches and
    /// is 16 digits long.
    pub fn pan_of_scheme(&mut self, scheme: Scheme) -> String {
        let (prefix, length) = match rule_for(scheme) {
            Some(rule) => {
                let prefix = rule.prefixes.choose(&mut self.rng).copied().unwrap_or("");
                (prefix_digits(prefix), self.length_for(scheme))
            }
            None => {
                let lead = UNCLASSIFIED_LEADING_DIGITS
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(0);
                (vec![lead], DEFAULT_PAN_LENGTH)
            }
        };
        trace!(
            "seeding {} pan with prefix {} and length {}",
            scheme,
            digits_to_string(&prefix),
            length
        );

        let mut digits = prefix;
        digits.reserve(length.saturating_sub(digits.len()));
        let remaining = (length - 1).saturating_sub(digits.len());
        self.fill_random(&mut digits, remaining);

        let pan = complete_with_control_digit(digits);
        debug!("generated {} pan {}", scheme, mask_pan(&pan));
        pan
    }

    /// Target length for `scheme`: one of its accepted lengths that also sits
    /// inside the global validity band.
    fn length_for(&mut self, scheme: Scheme) -> usize {
        let candidates: Vec<usize> = scheme
            .length_rule()
            .lengths()
            .into_iter()
            .filter(|len| (MIN_VALID_PAN_LENGTH..=MAX_VALID_PAN_LENGTH).contains(len))
            .collect();
        candidates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(DEFAULT_PAN_LENGTH)
    }

    fn fill_random(&mut self, digits: &mut Vec<u8>, count: usize) {
        digits.extend((0..count).map(|_| self.rng.random_range(0..10u8)));
    }
}

fn prefix_digits(prefix: &str) -> Vec<u8> {
    prefix.bytes().map(|b| b - b'0').collect()
}

/// Append the first control digit in `0..=9` that makes `payload` pass the
/// Luhn check.
///
/// # Panics
///
/// Exactly one candidate always matches, so failing to find one means the
/// checksum engine is broken.
fn complete_with_control_digit(mut payload: Vec<u8>) -> String {
    for candidate in 0..=9u8 {
        payload.push(candidate);
        if luhn_valid_digits(&payload) {
            return digits_to_string(&payload);
        }
        payload.pop();
    }
    unreachable!(
        "no Luhn control digit completes a {}-digit payload",
        payload.len()
    )
}

/// Random Luhn-valid PAN of `length` digits, using the thread-local RNG.
#[cfg(feature = "std")]
pub fn generate_random_pan_of_length(length: usize) -> Result<String> {
    PanGenerator::new().pan_of_length(length)
}

/// Random Luhn-valid 16-digit PAN, using the thread-local RNG.
#[cfg(feature = "std")]
pub fn generate_random_pan() -> String {
    PanGenerator::new().pan()
}

/// Random valid PAN for `scheme`, using the thread-local RNG.
#[cfg(feature = "std")]
pub fn generate_random_pan_of_scheme(scheme: Scheme) -> String {
    PanGenerator::new().pan_of_scheme(scheme)
}

// cardutils/src/error.rs

//! Crate error type. Only the diagnostic and generator entry points return
//! it; the boolean predicates never fail.

use crate::scheme::Scheme;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// PAN length outside the global validity band.
    #[error("invalid pan length: expected {min}..={max}, got {actual}")]
    LengthOutOfRange {
        /// Shortest accepted length.
        min: usize,
        /// Longest accepted length.
        max: usize,
        /// Length of the input.
        actual: usize,
    },

    /// The classified scheme does not issue PANs of this length.
    #[error("length {length} is not accepted for scheme {scheme}")]
    SchemeLength {
        /// Scheme the PAN was classified as.
        scheme: Scheme,
        /// Length of the input.
        length: usize,
    },

    /// A character that is not an ASCII decimal digit.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Character index (not byte offset).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The Luhn control digit does not match the payload.
    #[error("checksum mismatch: expected control digit {expected}, got {actual}")]
    ChecksumMismatch {
        /// Control digit the payload requires.
        expected: u8,
        /// Control digit found in the input.
        actual: u8,
    },

    /// Requested generation length leaves no room for a control digit.
    #[error("pan too short: need at least {minimum} digits, got {actual}")]
    PanTooShort {
        /// Shortest length that can be generated.
        minimum: usize,
        /// Requested length.
        actual: usize,
    },

    /// Scheme name that does not match any known scheme.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

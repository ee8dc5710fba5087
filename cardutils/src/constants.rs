// cardutils/src/constants.rs
//! Common constants used across the crate

/// Shortest PAN accepted by `validity_check`, regardless of scheme.
pub const MIN_VALID_PAN_LENGTH: usize = 14;

/// Longest PAN accepted by `validity_check`, regardless of scheme.
pub const MAX_VALID_PAN_LENGTH: usize = 19;

/// Length produced by `generate_random_pan`.
pub const DEFAULT_PAN_LENGTH: usize = 16;

/// A PAN needs at least one payload digit in front of the control digit.
pub const MIN_GENERATED_PAN_LENGTH: usize = 2;

/// Mask character used by `mask_pan`.
pub const DEFAULT_MASK_CHARACTER: char = '*';

/// Leading characters left visible by the masker (the BIN).
pub const MASK_VISIBLE_PREFIX: usize = 6;

/// Trailing characters left visible by the masker.
pub const MASK_VISIBLE_SUFFIX: usize = 4;

/// Leading digits that no classifier rule starts with.
pub const UNCLASSIFIED_LEADING_DIGITS: [u8; 3] = [0, 1, 9];

// cardutils/src/mask.rs

//! Display masking.

use crate::constants::{DEFAULT_MASK_CHARACTER, MASK_VISIBLE_PREFIX, MASK_VISIBLE_SUFFIX};

/// Mask the middle of a PAN with `*`, keeping the first 6 and last 4
/// characters. PANs of 10 characters or fewer are returned unchanged.
pub fn mask_pan(pan: &str) -> String {
    mask_pan_with_character(pan, DEFAULT_MASK_CHARACTER)
}

/// Same as [`mask_pan`] with a caller supplied mask character.
///
/// Works on characters, not digits: the input is not validated, so an
/// already masked PAN masks to itself.
pub fn mask_pan_with_character(pan: &str, mask_character: char) -> String {
    let visible = MASK_VISIBLE_PREFIX + MASK_VISIBLE_SUFFIX;
    let len = pan.chars().count();
    if len <= visible {
        return pan.to_string();
    }

    let hidden = len - visible;
    let mut out = String::with_capacity(pan.len());
    out.extend(pan.chars().take(MASK_VISIBLE_PREFIX));
    out.extend(std::iter::repeat_n(mask_character, hidden));
    out.extend(pan.chars().skip(MASK_VISIBLE_PREFIX + hidden));
    out
}

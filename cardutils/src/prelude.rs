// cardutils/src/prelude.rs

//! `use cardutils::prelude::*;` brings the whole public API into scope.

pub use crate::checksum::{luhn_check, luhn_control_digit};
pub use crate::classify::get_card_scheme;
pub use crate::generator::PanGenerator;
#[cfg(feature = "std")]
pub use crate::generator::{
    generate_random_pan, generate_random_pan_of_length, generate_random_pan_of_scheme,
};
pub use crate::mask::{mask_pan, mask_pan_with_character};
pub use crate::scheme::{LengthRule, Scheme, length_check_for_scheme};
pub use crate::validate::{validate, validity_check};
pub use crate::{Error, Pan, Result};

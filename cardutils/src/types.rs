// cardutils/src/types.rs

//! Validated PAN value type.

use crate::mask::{mask_pan, mask_pan_with_character};
use crate::scheme::Scheme;
use crate::validate::validate;
use crate::{Error, Result};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// PAN - Newtype Pattern
///
/// Only constructed through [`Pan::parse`], so every `Pan` has passed
/// `validate`. `Display` and `Debug` print the masked form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pan {
    digits: String,
    scheme: Scheme,
}

impl Pan {
    /// Validate `pan` and wrap it. Fails with the first check `validate`
    /// reports.
    pub fn parse(pan: &str) -> Result<Self> {
        let scheme = validate(pan)?;
        Ok(Self {
            digits: pan.to_string(),
            scheme,
        })
    }

    /// The full, unmasked PAN.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Scheme the PAN was classified as.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Bank identification number (first 6 digits).
    pub fn bin(&self) -> &str {
        &self.digits[..6]
    }

    /// Last 4 digits, control digit included.
    pub fn last_four(&self) -> &str {
        &self.digits[self.digits.len() - 4..]
    }

    /// Numeric value of the Luhn control digit.
    pub fn control_digit(&self) -> u8 {
        self.digits.as_bytes()[self.digits.len() - 1] - b'0'
    }

    /// Masked with `*`, see [`mask_pan`].
    pub fn masked(&self) -> String {
        mask_pan(&self.digits)
    }

    /// Masked with a caller supplied character.
    pub fn masked_with(&self, mask_character: char) -> String {
        mask_pan_with_character(&self.digits, mask_character)
    }
}

impl TryFrom<&str> for Pan {
    type Error = Error;

    fn try_from(pan: &str) -> Result<Self> {
        Pan::parse(pan)
    }
}

impl FromStr for Pan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Pan::parse(s)
    }
}

impl AsRef<str> for Pan {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for Pan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pan")
            .field("pan", &self.masked())
            .field("scheme", &self.scheme)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pan {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Pan {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Pan::parse(&s).map_err(serde::de::Error::custom)
    }
}

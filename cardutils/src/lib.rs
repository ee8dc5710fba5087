// cardutils/src/lib.rs

//! cardutils
//!
//! Payment card number (PAN) utilities: scheme detection from the leading
//! digits, structural validation (scheme length plus Luhn checksum), display
//! masking, and generation of checksum-valid test PANs.
//!
//! ```
//! use cardutils::prelude::*;
//!
//! assert_eq!(get_card_scheme("4300000000000000"), Scheme::Visa);
//! assert!(validity_check("5300000000000006"));
//! assert_eq!(mask_pan("5300000000000000"), "530000******0000");
//!
//! let pan = PanGenerator::seeded(1).pan_of_scheme(Scheme::JCB);
//! assert!(validity_check(&pan));
//! ```
#![warn(missing_docs)]

pub mod checksum;
pub mod classify;
pub mod constants;
pub mod error;
pub mod generator;
pub mod mask;
pub mod prelude;
pub mod scheme;
#[doc(hidden)]
pub mod test_support;
pub mod types;
pub mod utils;
pub mod validate;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// `crate::Scheme` and `crate::Pan` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::scheme::Scheme;
pub use crate::types::*;

pub use prelude::*;

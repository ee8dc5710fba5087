// cardutils/src/scheme.rs

//! Card schemes and the PAN lengths each one issues.

use crate::{Error, Result};
use derive_more::Display;
use std::str::FromStr;

/// Card network / issuer family identified by a PAN prefix.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    /// Visa, prefix `4`.
    Visa,
    /// MasterCard, prefixes `51`-`55`.
    MasterCard,
    /// Discover, prefixes `6011` and `65`.
    Discover,
    /// American Express, prefixes `34` and `37`.
    #[display(fmt = "American Express")]
    AmericanExpress,
    /// Diners Club, prefixes `36` and `38`.
    #[display(fmt = "Diners Club")]
    DinersClub,
    /// JCB, prefix `35`.
    JCB,
    /// BP fuel card, prefixes `7050` and `7052`.
    #[display(fmt = "BP Card")]
    BPCard,
    /// UnionPay, 6200xx-6250xx.
    UnionPay,
    /// No classifier rule matched.
    Unknown,
}

impl Scheme {
    /// Every scheme, `Unknown` last.
    pub const ALL: [Scheme; 9] = [
        Scheme::Visa,
        Scheme::MasterCard,
        Scheme::Discover,
        Scheme::AmericanExpress,
        Scheme::DinersClub,
        Scheme::JCB,
        Scheme::BPCard,
        Scheme::UnionPay,
        Scheme::Unknown,
    ];

    /// Human readable name, identical to the `Display` output.
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Visa => "Visa",
            Scheme::MasterCard => "MasterCard",
            Scheme::Discover => "Discover",
            Scheme::AmericanExpress => "American Express",
            Scheme::DinersClub => "Diners Club",
            Scheme::JCB => "JCB",
            Scheme::BPCard => "BP Card",
            Scheme::UnionPay => "UnionPay",
            Scheme::Unknown => "Unknown",
        }
    }

    /// `false` only for `Unknown`.
    pub fn is_known(&self) -> bool {
        *self != Scheme::Unknown
    }

    /// PAN lengths issued under this scheme.
    pub const fn length_rule(&self) -> LengthRule {
        match self {
            Scheme::AmericanExpress => LengthRule::Exact(15),
            Scheme::Visa => LengthRule::AnyOf(&[13, 16]),
            Scheme::MasterCard => LengthRule::Exact(16),
            Scheme::Discover | Scheme::JCB | Scheme::UnionPay => LengthRule::Between(16, 19),
            Scheme::DinersClub => LengthRule::Between(14, 19),
            Scheme::BPCard => LengthRule::Exact(19),
            Scheme::Unknown => LengthRule::Never,
        }
    }

    /// Whether this scheme issues PANs of `length` digits.
    pub fn accepts_length(&self, length: usize) -> bool {
        self.length_rule().accepts(length)
    }
}

impl FromStr for Scheme {
    type Err = Error;

    /// Accepts the display name (case-insensitive), e.g. `"american express"`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Scheme::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownScheme(s.to_string()))
    }
}

/// Length acceptance rule for a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// A single length.
    Exact(usize),
    /// Any of a short list of lengths.
    AnyOf(&'static [usize]),
    /// Inclusive on both ends.
    Between(usize, usize),
    /// No length is accepted.
    Never,
}

impl LengthRule {
    /// Whether `length` satisfies the rule.
    pub fn accepts(&self, length: usize) -> bool {
        match *self {
            LengthRule::Exact(n) => length == n,
            LengthRule::AnyOf(lengths) => lengths.contains(&length),
            LengthRule::Between(min, max) => (min..=max).contains(&length),
            LengthRule::Never => false,
        }
    }

    /// Accepted lengths in ascending order.
    pub fn lengths(&self) -> Vec<usize> {
        match *self {
            LengthRule::Exact(n) => vec![n],
            LengthRule::AnyOf(lengths) => lengths.to_vec(),
            LengthRule::Between(min, max) => (min..=max).collect(),
            LengthRule::Never => Vec::new(),
        }
    }
}

/// Whether `length` is a valid PAN length for `scheme`. `Unknown` accepts
/// nothing.
pub fn length_check_for_scheme(scheme: Scheme, length: usize) -> bool {
    scheme.accepts_length(length)
}

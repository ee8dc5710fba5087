// cardutils/src/classify.rs

//! Prefix based scheme classification.
//!
//! Rules are evaluated in table order and the first match wins. Prefixes of
//! different schemes nest (`3` is shared by Amex, Diners and JCB; `6` by
//! Discover and UnionPay) so the order of [`PREFIX_RULES`] is significant.
//! Classification never looks at length or checksum.

use crate::scheme::Scheme;

/// One classifier rule: a PAN whose leading characters equal any of
/// `prefixes` belongs to `scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    /// Scheme assigned on a match.
    pub scheme: Scheme,
    /// Accepted leading digit strings; also used to seed generated PANs.
    pub prefixes: &'static [&'static str],
    /// Minimum PAN length before the rule is considered at all.
    pub min_len: usize,
}

impl PrefixRule {
    const fn new(scheme: Scheme, prefixes: &'static [&'static str]) -> Self {
        Self {
            scheme,
            prefixes,
            min_len: 0,
        }
    }

    const fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Whether `pan` starts with one of the rule's prefixes.
    pub fn matches(&self, pan: &str) -> bool {
        pan.len() >= self.min_len && self.prefixes.iter().any(|p| pan.starts_with(p))
    }
}

/// Ordered classifier rules.
///
/// UnionPay covers 6200xx-6249xx and 6250xx only; 6251xx-6259xx stay
/// unclassified. It needs four characters to be decided.
pub const PREFIX_RULES: &[PrefixRule] = &[
    PrefixRule::new(Scheme::Visa, &["4"]),
    PrefixRule::new(Scheme::AmericanExpress, &["34", "37"]),
    PrefixRule::new(Scheme::MasterCard, &["51", "52", "53", "54", "55"]),
    PrefixRule::new(Scheme::DinersClub, &["36", "38"]),
    PrefixRule::new(Scheme::JCB, &["35"]),
    PrefixRule::new(Scheme::Discover, &["6011", "65"]),
    PrefixRule::new(Scheme::BPCard, &["7052", "7050"]),
    PrefixRule::new(Scheme::UnionPay, &["620", "621", "622", "623", "624", "6250"]).with_min_len(4),
];

/// The rule that seeds PANs for `scheme`, if it has one.
pub fn rule_for(scheme: Scheme) -> Option<&'static PrefixRule> {
    PREFIX_RULES.iter().find(|rule| rule.scheme == scheme)
}

/// Identify the card scheme from the PAN's leading digits.
pub fn get_card_scheme(pan: &str) -> Scheme {
    PREFIX_RULES
        .iter()
        .find(|rule| rule.matches(pan))
        .map_or(Scheme::Unknown, |rule| rule.scheme)
}

#[path = "../common/mod.rs"]
mod common;

use cardutils::test_support::seeded_generator;
use cardutils::{Pan, Scheme};

#[test]
fn parse_valid_samples() {
    for (raw, scheme) in common::valid_samples() {
        let pan: Pan = raw.parse().unwrap();
        assert_eq!(pan.scheme(), scheme);
        assert_eq!(pan.as_str(), raw);
        assert_eq!(pan.to_string(), cardutils::mask_pan(raw));
    }
}

#[test]
fn parse_generated_pans() {
    let mut pangen = seeded_generator(5);
    for scheme in Scheme::ALL.into_iter().filter(Scheme::is_known) {
        let raw = pangen.pan_of_scheme(scheme);
        let pan = Pan::parse(&raw).unwrap();
        assert_eq!(pan.scheme(), scheme);
        assert_eq!(pan.bin(), &raw[..6]);
        assert_eq!(pan.last_four(), &raw[raw.len() - 4..]);
    }
}

#[test]
fn parse_malformed_is_error() {
    for raw in common::malformed_samples() {
        assert!(Pan::parse(raw).is_err(), "{raw:?}");
    }
}

#[path = "../common/mod.rs"]
mod common;

use cardutils::Scheme;
use cardutils::classify::{PREFIX_RULES, get_card_scheme};

#[test]
fn classify_reference_prefixes() {
    assert_eq!(get_card_scheme("4300000000000000"), Scheme::Visa);
    assert_eq!(get_card_scheme("5100000000000000"), Scheme::MasterCard);
    assert_eq!(get_card_scheme("5600000000000000"), Scheme::Unknown);
    assert_eq!(get_card_scheme("6200000000000000"), Scheme::UnionPay);
    assert_eq!(get_card_scheme("6251000000000000"), Scheme::Unknown);
    assert_eq!(get_card_scheme("3528000000000000"), Scheme::JCB);
}

#[test]
fn classify_valid_samples() {
    for (pan, scheme) in common::valid_samples() {
        assert_eq!(get_card_scheme(pan), scheme, "{pan}");
    }
}

#[test]
fn classify_malformed_never_panics() {
    for pan in common::malformed_samples() {
        let _ = get_card_scheme(pan);
    }
}

#[test]
fn rule_order_is_stable() {
    let order: Vec<Scheme> = PREFIX_RULES.iter().map(|r| r.scheme).collect();
    assert_eq!(
        order,
        vec![
            Scheme::Visa,
            Scheme::AmericanExpress,
            Scheme::MasterCard,
            Scheme::DinersClub,
            Scheme::JCB,
            Scheme::Discover,
            Scheme::BPCard,
            Scheme::UnionPay,
        ]
    );
}

// fixtures.rs — commonly used sample PANs

use cardutils::Scheme;

/// Public test card numbers that pass `validity_check`, with their scheme.
pub fn valid_samples() -> Vec<(&'static str, Scheme)> {
    vec![
        ("4111111111111111", Scheme::Visa),
        ("4012888888881881", Scheme::Visa),
        ("5300000000000006", Scheme::MasterCard),
        ("5555555555554444", Scheme::MasterCard),
        ("378282246310005", Scheme::AmericanExpress),
        ("371449635398431", Scheme::AmericanExpress),
        ("6011111111111117", Scheme::Discover),
        ("36227206271667", Scheme::DinersClub),
        ("3530111333300000", Scheme::JCB),
        ("6250941006528599", Scheme::UnionPay),
    ]
}

/// Inputs every entry point must treat as ordinary `false`/`Unknown`.
pub fn malformed_samples() -> Vec<&'static str> {
    vec![
        "",
        "4",
        "62",
        "625",
        "530000XXXXXX0000",
        "5300 0000 0000 0006",
        "éééééééééééééééé",
        "1234567890123",
        "40000000000000000000",
    ]
}

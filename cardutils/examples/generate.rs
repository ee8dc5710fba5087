//! Print one generated test PAN per scheme, plus the checks run against it.
//!
//! Usage:
//!   cargo run -p cardutils --example generate [SCHEME] [COUNT]
//!
//! SCHEME is a scheme name such as "Visa" or "American Express"; without it
//! every scheme is printed. Set RUST_LOG=cardutils=trace to see the generator
//! seeding.

use anyhow::Context;
use cardutils::{PanGenerator, Scheme, get_card_scheme, luhn_check, mask_pan, validity_check};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let schemes: Vec<Scheme> = match args.next() {
        Some(name) => vec![name.parse().with_context(|| format!("parsing scheme {name:?}"))?],
        None => Scheme::ALL.to_vec(),
    };
    let count: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("parsing count {n:?}"))?,
        None => 1,
    };

    let mut pangen = PanGenerator::new();
    for scheme in schemes {
        for _ in 0..count {
            let pan = pangen.pan_of_scheme(scheme);
            println!(
                "{:<17} {:<20} masked={:<20} classified={:<17} luhn={} valid={}",
                scheme.name(),
                pan,
                mask_pan(&pan),
                get_card_scheme(&pan).name(),
                luhn_check(&pan),
                validity_check(&pan)
            );
        }
    }
    Ok(())
}

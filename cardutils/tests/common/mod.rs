#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

/// Install env_logger once so `RUST_LOG=cardutils=trace cargo test` shows
/// generator output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

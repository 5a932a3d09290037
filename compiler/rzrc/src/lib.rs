//! rzr Command-Line Front End
//!
//! Library half of the `rzrc` binary: argument handling and the command
//! implementations, kept out of `main.rs` so they can be tested.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Set `RUST_LOG=rzr_codegen=trace` to see every scope and literal decision.
/// Output goes to stderr so it never mixes with generated code on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

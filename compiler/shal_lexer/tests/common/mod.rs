//! Shared helpers for integration tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber writing to the test harness.
///
/// Only active when `RUST_LOG` is set, e.g.
/// `RUST_LOG=shal_lexer=trace cargo test -p shal_lexer`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}

//! Log subscriber for the `ezc` binary.

use std::sync::Once;

/// Environment variable holding the log filter, e.g. `EZ_LOG=ez_eval=trace`.
pub const LOG_ENV: &str = "EZ_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `EZ_LOG`, falling back to
/// `RUST_LOG`. Does nothing when neither is set. Safe to call repeatedly.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(directives) = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG")) else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::new(directives))
            .init();
    });
}

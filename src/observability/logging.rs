//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Translate `-v` counts into a level that only ever raises the configured one

use crate::config::validation::LOG_LEVELS;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Pick the effective level: `-v`, `-vv` and `-vvv` ask for info, debug and
/// trace, but never lower a more verbose configured level.
pub fn effective_level(configured: &str, verbose: u8) -> &str {
    let requested = match verbose {
        0 => return configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let rank = |level: &str| LOG_LEVELS.iter().position(|l| *l == level);
    match (rank(configured), rank(requested)) {
        (Some(c), Some(r)) if c > r => configured,
        _ => requested,
    }
}

/// Install the global subscriber for both the library and the `dbg`
/// binary targets. `RUST_LOG` wins over `level` when set.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("proxy_dbg={level},dbg={level}")));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

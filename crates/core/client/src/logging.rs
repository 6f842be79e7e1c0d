//! Tracing set-up for binaries embedding the client

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a formatted subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`. Returns `false` when a global subscriber already exists.
pub fn init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .try_init()
        .is_ok()
}

/// Default filter: client events at `info`, transport internals quieter
pub const DEFAULT_FILTER: &str = "invest_client=info,tower=warn,tonic=info,h2=warn";

//! Diagnostic output for the command line tools.
//!
//! Tool output goes to stdout, so events are written to stderr. The default
//! level is `warn`; set `RUST_LOG=zstd_devtools=debug` to trace what the
//! library does.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

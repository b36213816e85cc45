//! Diagnostic logging.
//!
//! Progress for the user is printed directly; `tracing` events carry request
//! and failure details to stderr. The filter comes from `RUST_LOG` and
//! defaults to `warn`, so an ordinary session prints nothing extra.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

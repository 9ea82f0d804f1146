//! Diagnostic logging via `tracing_subscriber`.
//!
//! Events go to stderr so they never interleave with prompts on stdout.
//! Verbosity follows `RUST_LOG` and defaults to `warn`, e.g.
//! ```bash
//! RUST_LOG=vehicle_risk=debug vehicle-risk
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn initialize_tracer() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // A subscriber may already be installed; keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

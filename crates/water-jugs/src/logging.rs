//! Diagnostics for the command-line solver.
//!
//! Search events are emitted through `tracing` at debug level and only show
//! up when `RUST_LOG` asks for them. They go to stderr so that stdout carries
//! nothing but the solution.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`.
///
/// ```bash
/// RUST_LOG=water_jugs=debug water-jugs --algorithm breadth-first
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

//! Global `tracing` subscriber setup for applications embedding the tree.

use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::config::Settings;

/// Installs a stderr subscriber filtered by `RUST_LOG`, falling back to
/// `settings.log_filter`.
///
/// Returns false if a global subscriber was already set.
pub fn init_logging(settings: &Settings) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return false;
    }
    match subscriber.try_init() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Error: Failed to set up logging: {}", e);
            false
        }
    }
}

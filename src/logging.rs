use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

/// Installs the stderr subscriber. `RUST_LOG` wins over the default filter.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

//! Diagnostic logging to stderr.
//!
//! The filter comes from `IONOSCTL_LOG` (e.g. `IONOSCTL_LOG=ionosctl_printer=trace`)
//! and defaults to `warn`. `--verbose` forces `debug`. Log lines never go to
//! stdout, which carries the rendered output.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "IONOSCTL_LOG";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to install log subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Call once at startup.
pub fn init_logging(verbose: bool) -> Result<(), LogError> {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}

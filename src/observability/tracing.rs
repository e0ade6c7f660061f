//! Logging setup built on `tracing-subscriber`.
//!
//! Log output goes to stderr so stdout stays free for the summary and the
//! `inventory` listing. `CMDCOV_LOG` takes precedence over `RUST_LOG`; when
//! neither is set the `-v` count picks the level.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "CMDCOV_LOG";

/// Default filter directive for a `-v` count
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .try_init();
}

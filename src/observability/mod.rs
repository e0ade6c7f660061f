//! Logging infrastructure.

pub mod tracing;

pub use self::tracing::{init_logging, level_for_verbosity, LOG_ENV_VAR};

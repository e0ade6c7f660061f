//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for command coverage runs.
///
/// Every variant is terminal: the pipeline never retries and never degrades
/// to a partial report.
#[derive(Debug, Error)]
pub enum CoverageError {
    /// The target executable does not exist at the configured path
    #[error("Unable to locate command artifact at {}", path.display())]
    MissingArtifact { path: PathBuf },

    /// The target exists but cannot be executed directly
    #[error("Command artifact at {} is not executable", path.display())]
    ArtifactNotExecutable { path: PathBuf },

    /// The launcher process could not be started
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The target ran but exited unsuccessfully
    #[error("{program} exited with {status}: {stderr}")]
    Invocation {
        program: String,
        status: String,
        stderr: String,
    },

    /// No usable command listing was produced
    #[error("Empty command inventory: {reason}")]
    EmptyInventory { reason: String },

    /// A file under the source root could not be read
    #[error("Failed to read source file {}: {source}", path.display())]
    CorpusReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source root exists but cannot be scanned
    #[error("Invalid source root {}: {message}", path.display())]
    SourceRoot { path: PathBuf, message: String },

    /// The rendered report could not be written
    #[error("Failed to write report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Coverage fell below the configured minimum
    #[error("Command coverage {actual:.1}% is below the required minimum of {required:.1}%")]
    BelowThreshold { actual: f64, required: f64 },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CoverageError {
    /// Create an empty-inventory error with a reason
    pub fn empty_inventory(reason: impl Into<String>) -> Self {
        Self::EmptyInventory {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, CoverageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_message_names_path() {
        let err = CoverageError::MissingArtifact {
            path: PathBuf::from("/opt/fcli/fcli.jar"),
        };
        assert_eq!(
            err.to_string(),
            "Unable to locate command artifact at /opt/fcli/fcli.jar"
        );
    }

    #[test]
    fn test_below_threshold_formats_one_decimal() {
        let err = CoverageError::BelowThreshold {
            actual: 42.25,
            required: 80.0,
        };
        assert!(err.to_string().contains("42.2%") || err.to_string().contains("42.3%"));
        assert!(err.to_string().contains("80.0%"));
    }

    #[test]
    fn test_empty_inventory_carries_reason() {
        let err = CoverageError::empty_inventory("parsed zero commands");
        assert_eq!(err.to_string(), "Empty command inventory: parsed zero commands");
    }
}

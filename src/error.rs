//! Error types for the fan-out engine and its collaborators
//!
//! Only environment problems are errors here. A command that runs and exits
//! nonzero is a normal [`ExecutionResult`](crate::core::ExecutionResult), never
//! an `MrhError`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mrh operations
#[derive(Error, Debug)]
pub enum MrhError {
    /// The target directory vanished or was never a directory.
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The shell interpreter itself could not be started.
    #[error("Failed to spawn shell in {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `--filter` pattern is not valid glob syntax.
    #[error("Invalid filter pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// The configuration file is missing, malformed, or holds invalid values.
    #[error("Configuration error in {}: {message}", path.display())]
    Configuration { path: PathBuf, message: String },

    /// The worker pool could not hand out permits.
    #[error("Worker pool failure: {message}")]
    WorkerPool { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, MrhError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_message_names_path() {
        let err = MrhError::DirectoryNotFound {
            path: PathBuf::from("/tmp/gone"),
        };
        assert_eq!(err.to_string(), "Directory not found: /tmp/gone");
    }

    #[test]
    fn test_invalid_pattern_message() {
        let source = glob::Pattern::new("[").unwrap_err();
        let err = MrhError::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid filter pattern \"[\""));
    }
}

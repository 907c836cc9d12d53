//! Error types for the launcher.
//!
//! Every failure in the bootstrap is terminal: it is reported on stderr at
//! the point of detection and mapped to a non-zero process exit code. There
//! is no retry and no recovery; this is a single-shot launcher.

use thiserror::Error;

/// Result type alias for launcher operations.
pub type LaunchResult<T> = Result<T, LaunchError>;

/// Unified error type for the bootstrap.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Wrong or missing command-line arguments.
    #[error("{message}")]
    Usage {
        /// Human-readable diagnostic for the user.
        message: String,
    },

    /// The distributed-runtime context failed to initialize.
    #[error("runtime initialization failed: {0}")]
    RuntimeInit(String),

    /// The distributed-runtime context failed to release cleanly.
    #[error("runtime teardown failed: {0}")]
    RuntimeTeardown(String),

    /// The solver entry point reported a failure.
    #[error("solver failed: {0}")]
    Solver(String),

    /// The debug-mode configuration dump could not be serialized.
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LaunchError {
    /// Create a usage error with a message.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Check if this error is a command-line usage problem.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}

//! Shared CLI error and exit-code types.

use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Script generated
    Success = 0,
    /// User input was understood but invalid (e.g. unknown pin)
    ValidationError = 1,
    /// Reading input, loading config, or writing the script failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid input
    Validation,
    /// I/O failure
    Io,
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CliError {
    /// What went wrong, for exit-code selection
    pub kind: CliErrorKind,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

//! CLI-specific error types
//!
//! Engine errors keep their taxonomy code when they reach the CLI, so a
//! script can tell an invalid literal from a bad config file.

use std::fmt;
use std::io;

use crate::address::AddressError;
use crate::error::ErrorKind;
use crate::numeral::NumeralError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Error reported by the canonicalization or numeral engine
    Engine(ErrorKind),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "IPV6CANON_CLI_CONFIG_ERROR",
            Self::IoError => "IPV6CANON_CLI_IO_ERROR",
            Self::Engine(kind) => kind.code(),
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Argument that fails the format its command expects
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::Engine(ErrorKind::InvalidFormat), msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<AddressError> for CliError {
    fn from(e: AddressError) -> Self {
        Self::new(CliErrorCode::Engine(e.kind()), e.to_string())
    }
}

impl From<NumeralError> for CliError {
    fn from(e: NumeralError) -> Self {
        Self::new(CliErrorCode::Engine(e.kind()), e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::ValidationFailure;

    #[test]
    fn test_engine_errors_keep_their_code() {
        let err: CliError = AddressError::ExpansionFailed(ValidationFailure::Empty).into();
        assert_eq!(err.code_str(), "IPV6CANON_EXPANSION_FAILED");

        let err: CliError = NumeralError::UnsupportedBase(10).into();
        assert_eq!(err.code_str(), "IPV6CANON_UNSUPPORTED_BASE");
        assert!(err.message().contains("10"));
    }

    #[test]
    fn test_display() {
        let err = CliError::config_error("bad file");
        assert_eq!(format!("{}", err), "IPV6CANON_CLI_CONFIG_ERROR: bad file");
    }
}

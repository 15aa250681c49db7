//! # Numeral Errors

use thiserror::Error;

use super::base::NumeralBase;
use crate::error::ErrorKind;

/// Result type for numeral conversions
pub type NumeralResult<T> = Result<T, NumeralError>;

/// Numeral conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    #[error("Input cannot be empty")]
    Empty,

    #[error("Invalid {expected} digits provided: {input:?}")]
    InvalidDigits { expected: NumeralBase, input: String },

    #[error("Unsupported base {0} (expected 2 or 16)")]
    UnsupportedBase(u32),

    #[error("Integer must not be negative")]
    NegativeValue,

    #[error("Value does not fit in {bits} bits")]
    Overflow { bits: u32 },
}

impl NumeralError {
    /// Get the taxonomy kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumeralError::Empty | NumeralError::InvalidDigits { .. } => ErrorKind::InvalidFormat,
            NumeralError::UnsupportedBase(_) => ErrorKind::UnsupportedBase,
            NumeralError::NegativeValue => ErrorKind::NegativeValue,
            NumeralError::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

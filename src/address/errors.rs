//! # Address Errors
//!
//! Error types for the IPv6 address subsystem.

use thiserror::Error;

use crate::error::ErrorKind;

/// Result type for address operations
pub type AddressResult<T> = Result<T, AddressError>;

/// The first grammar check a candidate literal failed.
///
/// Checks run in declaration order; validation stops at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("IPv6 address cannot be empty")]
    Empty,

    #[error("Not valid IPv6 character(s)")]
    IllegalCharacter,

    #[error("Colon used alone at the beginning or at the end")]
    StrayColon,

    #[error("Colon used more than twice contiguously")]
    TooManyColons,

    #[error("Double-colon used more than once")]
    MultipleElisions,

    #[error("A segment can only have a max of four hex digits")]
    SegmentTooLong,

    #[error("Address without double-colon must have exactly eight segments")]
    WrongSegmentCount,

    /// `::` must stand for at least two zero segments
    #[error("Double-colon used with more than six explicit segments")]
    ElisionTooShort,
}

/// IPv6 address errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Invalid IPv6 format: {0}")]
    InvalidFormat(ValidationFailure),

    /// Expansion inside `abbreviate` failed
    #[error("Expanding part failed: {0}")]
    ExpansionFailed(ValidationFailure),
}

impl AddressError {
    /// Get the taxonomy kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            AddressError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            AddressError::ExpansionFailed(_) => ErrorKind::ExpansionFailed,
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The validator check that caused this error
    pub fn reason(&self) -> ValidationFailure {
        match self {
            AddressError::InvalidFormat(reason) | AddressError::ExpansionFailed(reason) => *reason,
        }
    }
}

impl From<ValidationFailure> for AddressError {
    fn from(reason: ValidationFailure) -> Self {
        AddressError::InvalidFormat(reason)
    }
}

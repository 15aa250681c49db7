//! Error taxonomy shared by every ipv6canon subsystem
//!
//! Error codes:
//! - IPV6CANON_INVALID_FORMAT
//! - IPV6CANON_UNSUPPORTED_BASE
//! - IPV6CANON_NEGATIVE_VALUE
//! - IPV6CANON_EXPANSION_FAILED
//! - IPV6CANON_OVERFLOW
//!
//! Subsystem errors (`AddressError`, `NumeralError`) map onto these kinds so a
//! caller can branch on the kind without matching every variant.

use std::fmt;

/// Kind of failure, independent of the subsystem that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input fails grammar or character-set validation
    InvalidFormat,
    /// Base-conversion call received a base other than 2 or 16
    UnsupportedBase,
    /// Arbitrary-width conversion received a negative magnitude
    NegativeValue,
    /// Abbreviation's internal expansion failed
    ExpansionFailed,
    /// Value does not fit the requested fixed-width integer type
    Overflow,
}

impl ErrorKind {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "IPV6CANON_INVALID_FORMAT",
            ErrorKind::UnsupportedBase => "IPV6CANON_UNSUPPORTED_BASE",
            ErrorKind::NegativeValue => "IPV6CANON_NEGATIVE_VALUE",
            ErrorKind::ExpansionFailed => "IPV6CANON_EXPANSION_FAILED",
            ErrorKind::Overflow => "IPV6CANON_OVERFLOW",
        }
    }

    /// Usage errors come from the caller picking a bad argument rather than
    /// supplying malformed data.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, ErrorKind::UnsupportedBase)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

//! Numeral bases and digit-set checks

use std::fmt;

use serde::Serialize;

use super::errors::{NumeralError, NumeralResult};

/// The two bases a numeral string may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralBase {
    Binary,
    Hexadecimal,
}

impl NumeralBase {
    pub fn radix(&self) -> u32 {
        match self {
            NumeralBase::Binary => 2,
            NumeralBase::Hexadecimal => 16,
        }
    }

    /// Whether every character of `text` is a digit of this base
    pub fn accepts(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| c.is_digit(self.radix()))
    }

    /// Trim and lowercase `text`, then check it against this base.
    ///
    /// The returned string is safe to hand to the unchecked digit helpers.
    pub(crate) fn normalize(&self, text: &str) -> NumeralResult<String> {
        let digits = text.trim().to_lowercase();
        if digits.is_empty() {
            return Err(NumeralError::Empty);
        }
        if !self.accepts(&digits) {
            return Err(NumeralError::InvalidDigits {
                expected: *self,
                input: text.to_string(),
            });
        }
        Ok(digits)
    }
}

impl TryFrom<u32> for NumeralBase {
    type Error = NumeralError;

    fn try_from(base: u32) -> NumeralResult<Self> {
        match base {
            2 => Ok(NumeralBase::Binary),
            16 => Ok(NumeralBase::Hexadecimal),
            other => Err(NumeralError::UnsupportedBase(other)),
        }
    }
}

impl fmt::Display for NumeralBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralBase::Binary => write!(f, "binary"),
            NumeralBase::Hexadecimal => write!(f, "hex"),
        }
    }
}

/// Whether `text` is a non-empty string of hex digits.
pub fn is_hex(text: &str) -> bool {
    NumeralBase::Hexadecimal.accepts(text.trim())
}

/// Whether `text` is a non-empty string of binary digits.
pub fn is_binary(text: &str) -> bool {
    NumeralBase::Binary.accepts(text.trim())
}

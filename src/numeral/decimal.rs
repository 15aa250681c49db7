//! Decimal extraction with an explicit base
//!
//! The base is an argument, not inferred from the digits: `"11"` is three in
//! base 2 and seventeen in base 16. Only bases 2 and 16 are supported and any
//! other value is a usage error.

use num_bigint::BigUint;

use super::base::NumeralBase;
use super::errors::{NumeralError, NumeralResult};
use super::integer::{binary_to_integer, hex_to_integer};
use super::width::FixedWidth;

/// Integer value of `text` read in `base` (2 or 16), unbounded in width.
///
/// # Errors
///
/// - `NumeralError::UnsupportedBase` if `base` is not 2 or 16
/// - `NumeralError::Empty` / `NumeralError::InvalidDigits` if `text` is not a
///   numeral of that base
pub fn to_decimal(text: &str, base: u32) -> NumeralResult<BigUint> {
    match NumeralBase::try_from(base)? {
        NumeralBase::Binary => binary_to_integer(text),
        NumeralBase::Hexadecimal => hex_to_integer(text),
    }
}

/// Integer value of `text` read in `base`, narrowed to a fixed-width type.
///
/// # Errors
///
/// As `to_decimal`, plus `NumeralError::Overflow` if the value needs more than
/// `T::BITS` bits.
pub fn to_decimal_as<T: FixedWidth>(text: &str, base: u32) -> NumeralResult<T> {
    let value = to_decimal(text, base)?;
    T::from_big(&value).ok_or(NumeralError::Overflow { bits: T::BITS })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_is_explicit() {
        assert_eq!(to_decimal("11", 2).unwrap(), BigUint::from(3u32));
        assert_eq!(to_decimal("11", 16).unwrap(), BigUint::from(17u32));
    }

    #[test]
    fn test_unsupported_base() {
        for base in [0, 1, 8, 10, 36] {
            assert_eq!(to_decimal("11", base).unwrap_err(), NumeralError::UnsupportedBase(base));
        }
    }

    #[test]
    fn test_base_checked_before_digits() {
        assert_eq!(to_decimal("zz", 10).unwrap_err(), NumeralError::UnsupportedBase(10));
    }

    #[test]
    fn test_digits_must_match_base() {
        assert!(matches!(to_decimal("12", 2), Err(NumeralError::InvalidDigits { .. })));
        assert!(matches!(to_decimal("-1", 16), Err(NumeralError::InvalidDigits { .. })));
        assert_eq!(to_decimal("", 16).unwrap_err(), NumeralError::Empty);
    }

    #[test]
    fn test_beyond_64_bits() {
        let ones = "1".repeat(68);
        let value = to_decimal(&ones, 2).unwrap();
        assert_eq!(value.bits(), 68);
        assert!(value > BigUint::from(u64::MAX));
    }

    #[test]
    fn test_fixed_width() {
        assert_eq!(to_decimal_as::<u8>("ff", 16).unwrap(), 255u8);
        assert_eq!(to_decimal_as::<u16>("1111", 2).unwrap(), 15u16);
        assert_eq!(to_decimal_as::<u64>("ffffffffffffffff", 16).unwrap(), u64::MAX);
    }

    #[test]
    fn test_fixed_width_overflow() {
        assert_eq!(
            to_decimal_as::<u8>("100", 16).unwrap_err(),
            NumeralError::Overflow { bits: 8 }
        );
        assert_eq!(
            to_decimal_as::<u64>(&"1".repeat(65), 2).unwrap_err(),
            NumeralError::Overflow { bits: 64 }
        );
    }
}

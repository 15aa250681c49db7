//! Conversion between integers and binary/hex digit strings
//!
//! Values that fit in 64 bits go through native formatting and parsing.
//! Wider values use positional arithmetic on `BigUint`:
//! - to binary: repeated subtraction of the greatest power of two
//! - from binary: sum of `2^position` over every set bit
//! - hex in either direction goes through the binary form

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

use super::base::NumeralBase;
use super::errors::{NumeralError, NumeralResult};
use super::nibble::{binary_digits_to_hex, hex_digits_to_binary};
use super::width::FixedWidth;

/// Widest binary input parsed natively
const NATIVE_BINARY_DIGITS: usize = 64;

/// Widest hex input parsed natively
const NATIVE_HEX_DIGITS: usize = 16;

/// Binary digits of a fixed-width unsigned integer.
pub fn integer_to_binary<T: FixedWidth>(value: T) -> String {
    format!("{:b}", value)
}

/// Lowercase hex digits of a fixed-width unsigned integer.
pub fn integer_to_hex<T: FixedWidth>(value: T) -> String {
    format!("{:x}", value)
}

/// Binary digits of an arbitrary-width integer.
///
/// # Errors
///
/// Returns `NumeralError::NegativeValue` for negative input.
pub fn big_integer_to_binary(value: &BigInt) -> NumeralResult<String> {
    let magnitude = non_negative(value)?;
    Ok(unsigned_to_binary(&magnitude))
}

/// Lowercase hex digits of an arbitrary-width integer.
///
/// # Errors
///
/// Returns `NumeralError::NegativeValue` for negative input.
pub fn big_integer_to_hex(value: &BigInt) -> NumeralResult<String> {
    let magnitude = non_negative(value)?;
    Ok(unsigned_to_hex(&magnitude))
}

/// Integer value of a binary digit string, unbounded in width.
pub fn binary_to_integer(binary: &str) -> NumeralResult<BigUint> {
    let digits = NumeralBase::Binary.normalize(binary)?;
    Ok(binary_digits_to_integer(&digits))
}

/// Integer value of a hex digit string, unbounded in width.
pub fn hex_to_integer(hex: &str) -> NumeralResult<BigUint> {
    let digits = NumeralBase::Hexadecimal.normalize(hex)?;
    Ok(hex_digits_to_integer(&digits))
}

fn non_negative(value: &BigInt) -> NumeralResult<BigUint> {
    value.to_biguint().ok_or(NumeralError::NegativeValue)
}

pub(crate) fn unsigned_to_binary(value: &BigUint) -> String {
    match value.to_u64() {
        Some(native) => integer_to_binary(native),
        None => greatest_power_binary(value),
    }
}

pub(crate) fn unsigned_to_hex(value: &BigUint) -> String {
    match value.to_u64() {
        Some(native) => integer_to_hex(native),
        None => binary_digits_to_hex(&greatest_power_binary(value)),
    }
}

/// Binary digits by subtracting place values from the largest power of two
/// not exceeding `value` down to `2^0`.
///
/// Once every higher place is subtracted, `2^e <= remaining` holds exactly
/// when bit `e` of `remaining` is set, and subtracting that place clears the
/// bit.
fn greatest_power_binary(value: &BigUint) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let exponent = value.bits() - 1;
    let mut remaining = value.clone();
    let mut bits = String::with_capacity(exponent as usize + 1);

    for e in (0..=exponent).rev() {
        if remaining.bit(e) {
            bits.push('1');
            remaining.set_bit(e, false);
        } else {
            bits.push('0');
        }
    }

    debug_assert!(remaining.is_zero());
    bits
}

/// Precondition: `digits` is normalized binary.
pub(crate) fn binary_digits_to_integer(digits: &str) -> BigUint {
    if digits.len() <= NATIVE_BINARY_DIGITS {
        if let Ok(native) = u64::from_str_radix(digits, 2) {
            return BigUint::from(native);
        }
    }

    // Sum of 2^position: each place is distinct, so adding it is setting its bit.
    let mut value = BigUint::zero();
    for (position, bit) in digits.bytes().rev().enumerate() {
        if bit == b'1' {
            value.set_bit(position as u64, true);
        }
    }
    value
}

/// Precondition: `digits` is normalized hex.
pub(crate) fn hex_digits_to_integer(digits: &str) -> BigUint {
    if digits.len() <= NATIVE_HEX_DIGITS {
        if let Ok(native) = u64::from_str_radix(digits, 16) {
            return BigUint::from(native);
        }
    }

    binary_digits_to_integer(&hex_digits_to_binary(digits, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_fixed_width_to_binary() {
        assert_eq!(integer_to_binary(255u8), "11111111");
        assert_eq!(integer_to_binary(0u8), "0");
        assert_eq!(integer_to_binary(u16::MAX), "1".repeat(16));
        assert_eq!(integer_to_binary(5u32), "101");
        assert_eq!(integer_to_binary(u64::MAX), "1".repeat(64));
    }

    #[test]
    fn test_fixed_width_to_hex() {
        assert_eq!(integer_to_hex(255u8), "ff");
        assert_eq!(integer_to_hex(0x1234u16), "1234");
        assert_eq!(integer_to_hex(u64::MAX), "ffffffffffffffff");
    }

    #[test]
    fn test_big_integer_to_binary_beyond_64_bits() {
        let value = BigInt::from(u64::MAX) + 1;
        let bits = big_integer_to_binary(&value).unwrap();
        assert_eq!(bits, format!("1{}", "0".repeat(64)));

        let value = BigInt::from(u128::MAX);
        assert_eq!(big_integer_to_binary(&value).unwrap(), "1".repeat(128));
    }

    #[test]
    fn test_big_integer_to_binary_small_values() {
        assert_eq!(big_integer_to_binary(&BigInt::from(0)).unwrap(), "0");
        assert_eq!(big_integer_to_binary(&BigInt::from(6)).unwrap(), "110");
    }

    #[test]
    fn test_big_integer_rejects_negative() {
        let value = BigInt::from(-1);
        assert_eq!(big_integer_to_binary(&value).unwrap_err(), NumeralError::NegativeValue);
        assert_eq!(big_integer_to_hex(&value).unwrap_err(), NumeralError::NegativeValue);
    }

    #[test]
    fn test_big_integer_to_hex_beyond_64_bits() {
        let value = BigInt::from(u128::MAX);
        assert_eq!(big_integer_to_hex(&value).unwrap(), "f".repeat(32));

        let value = BigInt::from(1u128 << 68);
        assert_eq!(big_integer_to_hex(&value).unwrap(), format!("1{}", "0".repeat(17)));
    }

    #[test]
    fn test_greatest_power_binary_matches_native() {
        for n in [1u64, 2, 3, 7, 8, 255, 256, 1023, 0xdead_beef, u64::MAX] {
            assert_eq!(greatest_power_binary(&BigUint::from(n)), format!("{:b}", n));
        }
    }

    #[test]
    fn test_binary_to_integer() {
        assert_eq!(binary_to_integer("1111").unwrap(), BigUint::from(15u32));
        assert_eq!(binary_to_integer("0").unwrap(), BigUint::zero());
        assert_eq!(binary_to_integer("0001").unwrap(), BigUint::one());
    }

    #[test]
    fn test_binary_to_integer_wide() {
        let bits = "1".repeat(68);
        let expected = (BigUint::one() << 68usize) - 1u32;
        assert_eq!(binary_to_integer(&bits).unwrap(), expected);
    }

    #[test]
    fn test_alternating_bits_far_beyond_native_width() {
        // 1010...10 == 2 * (2^n - 1) / 3 for even n
        let width = 80_000usize;
        let bits = "10".repeat(width / 2);
        let expected = ((BigUint::one() << width) - 1u32) / 3u32 * 2u32;

        assert_eq!(binary_to_integer(&bits).unwrap(), expected);
        assert_eq!(greatest_power_binary(&expected), bits);
        assert_eq!(unsigned_to_hex(&expected), "a".repeat(width / 4));
    }

    #[test]
    fn test_hex_to_integer() {
        assert_eq!(hex_to_integer("0f").unwrap(), BigUint::from(15u32));
        assert_eq!(hex_to_integer("FF").unwrap(), BigUint::from(255u32));

        let wide = "1".to_string() + &"0".repeat(20);
        assert_eq!(hex_to_integer(&wide).unwrap(), BigUint::one() << 80usize);
    }

    #[test]
    fn test_equivalent_representations() {
        assert_eq!(hex_to_integer("0f").unwrap(), binary_to_integer("1111").unwrap());
    }
}

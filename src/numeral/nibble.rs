//! Digit-level conversion between hex and binary strings
//!
//! Works one nibble at a time, so input width is unbounded and no value is
//! ever held in a native integer.

use super::base::NumeralBase;
use super::errors::NumeralResult;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Converts hex digits to binary digits.
///
/// Each hex digit becomes a four-bit group. Unless `keep_leading_zeros` is
/// set, the leading run of zeros of the combined result is stripped (an
/// all-zero input yields `"0"`).
pub fn hex_to_binary(hex: &str, keep_leading_zeros: bool) -> NumeralResult<String> {
    let digits = NumeralBase::Hexadecimal.normalize(hex)?;
    Ok(hex_digits_to_binary(&digits, keep_leading_zeros))
}

/// Converts binary digits to lowercase hex digits.
///
/// When the length is not a multiple of four, the leading `len % 4` bits form
/// the first, undersized group.
pub fn binary_to_hex(binary: &str) -> NumeralResult<String> {
    let digits = NumeralBase::Binary.normalize(binary)?;
    Ok(binary_digits_to_hex(&digits))
}

/// Precondition: `digits` is normalized hex.
pub(crate) fn hex_digits_to_binary(digits: &str, keep_leading_zeros: bool) -> String {
    let mut bits = String::with_capacity(digits.len() * 4);
    for c in digits.chars() {
        let nibble = c.to_digit(16).unwrap_or(0);
        bits.push_str(&format!("{:04b}", nibble));
    }

    if keep_leading_zeros {
        bits
    } else {
        strip_leading_zeros(&bits).to_string()
    }
}

/// Precondition: `digits` is normalized binary.
pub(crate) fn binary_digits_to_hex(digits: &str) -> String {
    let (head, rest) = digits.as_bytes().split_at(digits.len() % 4);

    let mut hex = String::with_capacity(digits.len() / 4 + 1);
    if !head.is_empty() {
        hex.push(nibble_char(head));
    }
    for group in rest.chunks(4) {
        hex.push(nibble_char(group));
    }
    hex
}

/// Strip leading zeros, leaving `"0"` for an all-zero numeral.
pub(crate) fn strip_leading_zeros(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        stripped => stripped,
    }
}

/// Hex digit for a group of at most four ASCII bits.
fn nibble_char(bits: &[u8]) -> char {
    let value = bits
        .iter()
        .fold(0usize, |acc, bit| (acc << 1) | usize::from(*bit == b'1'));
    char::from(HEX_DIGITS[value & 0xf])
}

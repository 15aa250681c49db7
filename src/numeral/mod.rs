//! Numeral base conversion
//!
//! Converts among binary digit strings, hex digit strings and non-negative
//! integers of any width.
//!
//! # Principles
//!
//! - Input is validated before any arithmetic; empty input is never valid
//! - Numerals carry no base prefix (`0x`, `0b`) and no sign
//! - Negative magnitudes fail with `NegativeValue`, they never wrap
//! - Fixed-width types (`u8`..`u128`) are thin adapters over one
//!   arbitrary-width path
//!
//! # Usage
//!
//! ```
//! use ipv6canon::numeral::{hex_to_binary, integer_to_hex, to_decimal, BigUint};
//!
//! assert_eq!(integer_to_hex(255u8), "ff");
//! assert_eq!(hex_to_binary("ff", false).unwrap(), "11111111");
//! assert_eq!(to_decimal("ff", 16).unwrap(), BigUint::from(255u32));
//! ```

mod base;
mod decimal;
mod errors;
mod integer;
mod nibble;
mod width;

pub use base::{is_binary, is_hex, NumeralBase};
pub use decimal::{to_decimal, to_decimal_as};
pub use errors::{NumeralError, NumeralResult};
pub use integer::{
    big_integer_to_binary, big_integer_to_hex, binary_to_integer, hex_to_integer,
    integer_to_binary, integer_to_hex,
};
pub use nibble::{binary_to_hex, hex_to_binary};
pub use width::FixedWidth;

pub use num_bigint::{BigInt, BigUint};

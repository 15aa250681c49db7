//! ipv6canon - IPv6 literal canonicalization and numeral base conversion
//!
//! - `address`: validate, expand and abbreviate IPv6 literals
//! - `numeral`: bit-exact conversion among binary, hex and unbounded integers
//!
//! All engine functions are pure and return structured errors; only the CLI
//! writes to stdout/stderr.

pub mod address;
pub mod cli;
pub mod error;
pub mod numeral;
pub mod observability;

pub use address::{abbreviate, expand, is_valid_ipv6, AddressError};
pub use error::ErrorKind;
pub use numeral::NumeralError;

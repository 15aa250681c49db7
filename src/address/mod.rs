//! IPv6 address canonicalization
//!
//! Pipeline: validate (gate) -> expand (normalize) -> abbreviate (compress).
//!
//! # Guarantees
//!
//! - Expansion always yields eight segments of four lowercase hex digits
//! - `expand` and `abbreviate` are idempotent
//! - Expanding an abbreviated address reproduces the expanded form exactly
//! - Every function is pure and safe to call from any thread
//!
//! Scoped zones (`%eth0`), embedded IPv4 and prefixes are not accepted.

mod abbreviator;
mod errors;
mod expander;
mod types;
mod validator;

pub use abbreviator::abbreviate;
pub use errors::{AddressError, AddressResult, ValidationFailure};
pub use expander::expand;
pub use types::{AbbreviatedAddress, ExpandedAddress, SEGMENT_COUNT, SEGMENT_WIDTH};
pub use validator::{is_valid_ipv6, validate, MAX_SEGMENTS_WITH_ELISION};

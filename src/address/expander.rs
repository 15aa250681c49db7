//! IPv6 address expansion
//!
//! Turns any valid literal into eight four-digit segments: every segment is
//! left-padded with `0`, and a `::` is replaced by as many `0000` segments as
//! needed to reach eight.

use super::errors::AddressResult;
use super::types::{ExpandedAddress, SEGMENT_COUNT, SEGMENT_WIDTH};
use super::validator::{normalize, validate_normalized};

const ZERO_SEGMENT: &str = "0000";

/// Expands a valid IPv6 literal.
///
/// # Errors
///
/// Returns `AddressError::InvalidFormat` carrying the first failed grammar
/// check if `text` is not a valid literal.
pub fn expand(text: &str) -> AddressResult<ExpandedAddress> {
    let addr = normalize(text);
    validate_normalized(&addr)?;
    Ok(expand_validated(&addr))
}

/// Expansion of a normalized literal that already passed validation.
///
/// Precondition: `validate_normalized(addr)` succeeded.
pub(crate) fn expand_validated(addr: &str) -> ExpandedAddress {
    if addr == "::" {
        return ExpandedAddress::from_segments(&vec![ZERO_SEGMENT.to_string(); SEGMENT_COUNT]);
    }

    let mut segments: Vec<String> = addr
        .split(':')
        .filter(|s| !s.is_empty())
        .map(|s| format!("{:0>width$}", s, width = SEGMENT_WIDTH))
        .collect();

    if segments.len() < SEGMENT_COUNT {
        let missing = SEGMENT_COUNT - segments.len();
        let fill = std::iter::repeat_n(ZERO_SEGMENT.to_string(), missing);

        if addr.ends_with("::") {
            segments.extend(fill);
        } else {
            // Slot of the elision: the first empty token when splitting on ':'.
            let at = addr.split(':').position(str::is_empty).unwrap_or(segments.len());
            segments.splice(at..at, fill);
        }
    }

    ExpandedAddress::from_segments(&segments)
}

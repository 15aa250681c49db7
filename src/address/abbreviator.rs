//! IPv6 address abbreviation
//!
//! Starting from the expanded form:
//! - each segment loses its leading zeros (`0000` becomes `0`)
//! - the longest run of two or more zero segments becomes `::`
//! - on a tie the earliest run wins
//! - a lone zero segment is never elided

use std::ops::Range;

use super::errors::{AddressError, AddressResult};
use super::expander::expand;
use super::types::AbbreviatedAddress;
use super::validator::{normalize, validate_normalized};

/// Shortest zero run that may be elided
const MIN_ELIDED_RUN: usize = 2;

/// Abbreviates a valid IPv6 literal.
///
/// # Errors
///
/// Returns `AddressError::InvalidFormat` if `text` fails validation, or
/// `AddressError::ExpansionFailed` if the expansion stage rejects it.
pub fn abbreviate(text: &str) -> AddressResult<AbbreviatedAddress> {
    let addr = normalize(text);
    validate_normalized(&addr)?;

    let expanded = expand(&addr).map_err(|e| AddressError::ExpansionFailed(e.reason()))?;

    let segments: Vec<&str> = expanded.segments().map(strip_leading_zeros).collect();

    let abbreviated = match longest_zero_run(&segments) {
        Some(run) => format!(
            "{}::{}",
            segments[..run.start].join(":"),
            segments[run.end..].join(":")
        ),
        None => segments.join(":"),
    };

    Ok(AbbreviatedAddress::new(abbreviated))
}

/// Strip leading zeros, keeping a single `0` for an all-zero segment.
fn strip_leading_zeros(segment: &str) -> &str {
    let stripped = segment.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Segment range of the longest run of at least two zero segments.
///
/// Only a strictly longer run replaces the current best, so the earliest run
/// wins ties.
fn longest_zero_run(segments: &[&str]) -> Option<Range<usize>> {
    let mut best: Option<Range<usize>> = None;
    let mut start: Option<usize> = None;

    for i in 0..=segments.len() {
        let is_zero = segments.get(i).is_some_and(|s| *s == "0");
        match (is_zero, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                let run = s..i;
                let longer = best.as_ref().is_none_or(|b| run.len() > b.len());
                if run.len() >= MIN_ELIDED_RUN && longer {
                    best = Some(run);
                }
                start = None;
            }
            _ => {}
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::errors::ValidationFailure;

    fn expect(input: &str, target: &str) {
        assert_eq!(abbreviate(input).unwrap().as_str(), target, "input: {:?}", input);
    }

    #[test]
    fn test_longest_run_wins() {
        expect("0000:0000:0003:0000:0000:0000:0000:0008", "0:0:3::8");
    }

    #[test]
    fn test_tie_prefers_earliest() {
        expect("1:0:0:2:0:0:3:4", "1::2:0:0:3:4");
        expect("0:0:1:2:3:4:0:0", "::1:2:3:4:0:0");
    }

    #[test]
    fn test_later_longer_run_replaces_earlier_run() {
        expect("1:0:0:2:0:0:0:3", "1:0:0:2::3");
        expect("0:0:1:0:0:0:0:2", "0:0:1::2");
    }

    #[test]
    fn test_single_zero_not_elided() {
        expect("2001:db8:0:1:1:1:1:1", "2001:db8:0:1:1:1:1:1");
    }

    #[test]
    fn test_all_zero() {
        expect("0:0:0:0:0:0:0:0", "::");
        expect("::", "::");
    }

    #[test]
    fn test_edges() {
        expect("0:0:0:0:0:0:0:1", "::1");
        expect("fe80:0:0:0:0:0:0:0", "fe80::");
    }

    #[test]
    fn test_strips_leading_zeros() {
        expect(
            "2001:0db8:0000:0000:0000:ff00:0042:8329",
            "2001:db8::ff00:42:8329",
        );
    }

    #[test]
    fn test_zero_digit_inside_segment_is_not_a_zero_segment() {
        expect("10:0:0:1:2:3:4:5", "10::1:2:3:4:5");
        expect("a0:b0:c0:d0:e0:f0:100:1000", "a0:b0:c0:d0:e0:f0:100:1000");
    }

    #[test]
    fn test_repeated_run_elided_once() {
        expect("0:0:1:0:0:2:3:4", "::1:0:0:2:3:4");
    }

    #[test]
    fn test_idempotent() {
        let once = abbreviate("2001:0db8:0000:0000:0000:ff00:0042:8329").unwrap();
        let twice = abbreviate(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            abbreviate("1::2::3").unwrap_err(),
            AddressError::InvalidFormat(ValidationFailure::MultipleElisions)
        );
    }

    #[test]
    fn test_longest_zero_run() {
        assert_eq!(longest_zero_run(&["1", "0", "2"]), None);
        assert_eq!(longest_zero_run(&["0", "0", "1", "0", "0", "0"]), Some(3..6));
        assert_eq!(longest_zero_run(&["0", "0", "1", "0", "0"]), Some(0..2));
    }
}

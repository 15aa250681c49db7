//! Address value types
//!
//! Both forms are immutable strings that can only be built by the expander or
//! the abbreviator, so holding one means the text already satisfies its form.

use std::fmt;

use serde::Serialize;

/// Number of 16-bit segments in an IPv6 address
pub const SEGMENT_COUNT: usize = 8;

/// Number of hex digits in an expanded segment
pub const SEGMENT_WIDTH: usize = 4;

/// Eight segments of exactly four lowercase hex digits joined by single colons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpandedAddress(String);

impl ExpandedAddress {
    pub(crate) fn from_segments(segments: &[String]) -> Self {
        debug_assert_eq!(segments.len(), SEGMENT_COUNT);
        debug_assert!(segments.iter().all(|s| s.len() == SEGMENT_WIDTH));
        Self(segments.join(":"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the eight four-digit segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(':')
    }

    /// The 128-bit value the address denotes
    pub fn to_u128(&self) -> u128 {
        self.segments().fold(0u128, |acc, segment| {
            // Segments are validated hex of width four.
            let value = u16::from_str_radix(segment, 16).unwrap_or(0);
            (acc << 16) | u128::from(value)
        })
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExpandedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExpandedAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shortest literal: leading zeros stripped, longest zero run elided.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AbbreviatedAddress(String);

impl AbbreviatedAddress {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a `::` elision was introduced
    pub fn is_elided(&self) -> bool {
        self.0.contains("::")
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AbbreviatedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AbbreviatedAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

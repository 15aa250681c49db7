//! IPv6 literal grammar validation
//!
//! Checks run in order and stop at the first failure:
//! 1. Non-empty after trimming and lowercasing
//! 2. Only hex digits and colons
//! 3. A leading/trailing colon must belong to a `::`
//! 4. No run of three or more colons
//! 5. At most one `::`
//! 6. Every segment is 1-4 hex digits
//! 7. Without `::`, exactly eight segments
//! 8. With `::`, at most six explicit segments
//!
//! Validation never prints; the failed check is returned as data.

use std::sync::LazyLock;

use regex::Regex;

use super::errors::ValidationFailure;

/// Maximum explicit segments alongside a `::` (it must elide two or more)
pub const MAX_SEGMENTS_WITH_ELISION: usize = 6;

static ILLEGAL_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-f0-9:]").expect("static pattern"));

static HEX_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9a-f]+").expect("static pattern"));

static COMPLETE_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9a-f]{1,4}:){7}[0-9a-f]{1,4}$").expect("static pattern")
});

/// Trim surrounding whitespace and lowercase.
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Validates an IPv6 literal, returning the first failed check.
pub fn validate(text: &str) -> Result<(), ValidationFailure> {
    validate_normalized(&normalize(text))
}

/// Returns true only if every grammar check passes.
pub fn is_valid_ipv6(text: &str) -> bool {
    validate(text).is_ok()
}

/// Validation on an already-normalized literal.
pub(crate) fn validate_normalized(addr: &str) -> Result<(), ValidationFailure> {
    if addr.is_empty() {
        return Err(ValidationFailure::Empty);
    }

    if ILLEGAL_CHAR.is_match(addr) {
        return Err(ValidationFailure::IllegalCharacter);
    }

    let stray_leading = addr.starts_with(':') && !addr.starts_with("::");
    let stray_trailing = addr.ends_with(':') && !addr.ends_with("::");
    if stray_leading || stray_trailing {
        return Err(ValidationFailure::StrayColon);
    }

    if addr.contains(":::") {
        return Err(ValidationFailure::TooManyColons);
    }

    let elisions = addr.matches("::").count();
    if elisions > 1 {
        return Err(ValidationFailure::MultipleElisions);
    }

    if HEX_RUN.find_iter(addr).any(|m| m.as_str().len() > 4) {
        return Err(ValidationFailure::SegmentTooLong);
    }

    if elisions == 0 {
        if !COMPLETE_ADDRESS.is_match(addr) {
            return Err(ValidationFailure::WrongSegmentCount);
        }
    } else if HEX_RUN.find_iter(addr).count() > MAX_SEGMENTS_WITH_ELISION {
        return Err(ValidationFailure::ElisionTooShort);
    }

    Ok(())
}

//! Constants and validation patterns for the uid128 text format
//!
//! This module defines the separator bytes, digit limits, and the canonical
//! form pattern used by the formatter and parser.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between the high and low halves in the long text form
pub const SEPARATOR: char = ':';

/// Escaped separator accepted on input
///
/// Interchange layers that encode control characters may emit the colon as
/// this 4-byte sequence. The parser accepts it wherever `:` is accepted;
/// the formatter never emits it.
pub const ESCAPED_SEPARATOR: &str = "\\058";

/// Maximum hexadecimal digits a single 64-bit half can span
pub const MAX_HALF_HEX_DIGITS: usize = 16;

/// Characters kept on each side of a short display string
pub const SHORT_DISPLAY_AFFIX_LEN: usize = 3;

/// Regular expression for the canonical text forms
///
/// Short form: lowercase hex of the low half, no leading zeros (a single
/// "0" for zero). Long form: the same for both halves, joined by `:`.
///
/// Examples: "0", "ff", "1:0", "dead:beef"
pub static CANONICAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:0|[1-9a-f][0-9a-f]{0,15})(?::(?:0|[1-9a-f][0-9a-f]{0,15}))?$")
        .expect("Invalid canonical uid pattern")
});

/// Validates that a string is a canonical uid rendering
///
/// Returns `true` exactly when the formatter could have produced the
/// string. The parser is more lenient: it also accepts uppercase digits,
/// leading zeros, and the escaped separator. The empty string is not
/// canonical (zero renders as "0") even though the parser maps it to zero.
pub fn is_canonical(s: &str) -> bool {
    CANONICAL_PATTERN.is_match(s)
}

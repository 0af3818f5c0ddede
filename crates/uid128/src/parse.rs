//! Parsing of the canonical text forms
//!
//! The parser accepts both renderings of [`Uid128`] plus two input-only
//! leniencies: uppercase hexadecimal digits, and the escaped separator
//! `\058` in place of `:` (emitted by interchange layers that encode
//! control characters). Malformed input surfaces a [`ParseError`]; it is
//! never silently mapped to a default value.

use std::str::FromStr;

use crate::constants::{ESCAPED_SEPARATOR, MAX_HALF_HEX_DIGITS, SEPARATOR};
use crate::error::ParseError;
use crate::value::Uid128;

impl FromStr for Uid128 {
    type Err = ParseError;

    /// Parses either canonical form
    ///
    /// - The empty string parses as zero.
    /// - A bare hexadecimal run is the short form: the run is the low half.
    /// - A run followed by `:` (or `\058`) and a second run is the long
    ///   form. An empty second run parses as a zero low half.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Uid128::ZERO);
        }

        let (first, mut offset) = scan_hex(s, 0)?;
        if offset == 0 {
            return Err(ParseError::no_digits(s));
        }

        // Fully consumed: the short form was used, so the run that was
        // provisionally the high half is actually the low half.
        if offset == s.len() {
            return Ok(Uid128::from_low(first));
        }

        let rest = &s.as_bytes()[offset..];
        if rest.starts_with(ESCAPED_SEPARATOR.as_bytes()) {
            offset += ESCAPED_SEPARATOR.len();
        } else if rest[0] == SEPARATOR as u8 {
            offset += 1;
        } else {
            return Err(ParseError::invalid_separator(s, offset));
        }

        let (low, end) = scan_hex(s, offset)?;
        if end != s.len() {
            return Err(ParseError::trailing_input(s, end));
        }
        Ok(Uid128::from_parts(first, low))
    }
}

/// Scans a run of hexadecimal digits starting at `offset`
///
/// Returns the parsed 64-bit value and the offset one past the run. An
/// empty run yields zero with the offset unchanged; a run longer than 16
/// digits cannot fit in a half and is an overflow error.
fn scan_hex(input: &str, offset: usize) -> Result<(u64, usize), ParseError> {
    let bytes = input.as_bytes();
    let mut end = offset;
    while end < bytes.len() && bytes[end].is_ascii_hexdigit() {
        end += 1;
    }
    if end == offset {
        return Ok((0, offset));
    }
    if end - offset > MAX_HALF_HEX_DIGITS {
        return Err(ParseError::overflow(input, offset));
    }
    // The run is at most 16 ASCII hex digits, so this cannot fail
    let value = u64::from_str_radix(&input[offset..end], 16)
        .map_err(|_| ParseError::overflow(input, offset))?;
    Ok((value, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Uid128 {
        s.parse().unwrap_or_else(|e| panic!("parse {s:?}: {e}"))
    }

    #[test]
    fn test_parse_concrete_examples() {
        assert_eq!(parse(""), Uid128::ZERO);
        assert_eq!(parse("0"), Uid128::ZERO);
        assert_eq!(parse("ff"), Uid128::from_low(255));
        assert_eq!(parse("1:0"), Uid128::from_parts(1, 0));
        assert_eq!(parse("dead:beef"), Uid128::from_parts(0xdead, 0xbeef));
    }

    #[test]
    fn test_parse_short_form_fixup() {
        // A bare run lands in the low half even when 16 digits long
        let uid = parse("ffffffffffffffff");
        assert_eq!(uid.high(), 0);
        assert_eq!(uid.low(), u64::MAX);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        assert_eq!(parse("FF"), Uid128::from_low(255));
        assert_eq!(parse("DEAD:BEEF"), Uid128::from_parts(0xdead, 0xbeef));
        assert_eq!(parse("DeAd:bEeF"), Uid128::from_parts(0xdead, 0xbeef));
    }

    #[test]
    fn test_parse_escaped_separator() {
        assert_eq!(parse("1\\0580"), Uid128::from_parts(1, 0));
        assert_eq!(parse("dead\\058beef"), Uid128::from_parts(0xdead, 0xbeef));
    }

    #[test]
    fn test_parse_empty_low_run() {
        // The reference scanner parses an absent low run as zero
        assert_eq!(parse("1:"), Uid128::from_parts(1, 0));
        assert_eq!(parse("ff\\058"), Uid128::from_parts(0xff, 0));
    }

    #[test]
    fn test_parse_leading_zeros_accepted() {
        // Leading zeros are not canonical but parse fine
        assert_eq!(parse("00ff"), Uid128::from_low(255));
        assert_eq!(parse("01:0002"), Uid128::from_parts(1, 2));
    }

    #[test]
    fn test_parse_no_digits() {
        for input in ["xyz", ":5", "\\0581", "-1", " ff", "g"] {
            let err = input.parse::<Uid128>().unwrap_err();
            assert!(
                matches!(err, ParseError::NoDigits { .. }),
                "expected NoDigits for {input:?}, got {err}"
            );
        }
    }

    #[test]
    fn test_parse_invalid_separator() {
        for input in ["ff-0", "1;2", "ff 0", "1\\0572"] {
            let err = input.parse::<Uid128>().unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidSeparator { .. }),
                "expected InvalidSeparator for {input:?}, got {err}"
            );
        }
    }

    #[test]
    fn test_parse_trailing_input() {
        for input in ["1:0xyz", "1:2:3", "dead:beef "] {
            let err = input.parse::<Uid128>().unwrap_err();
            assert!(
                matches!(err, ParseError::TrailingInput { .. }),
                "expected TrailingInput for {input:?}, got {err}"
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        let seventeen = "f".repeat(17);
        for input in [
            seventeen.clone(),
            format!("{seventeen}:0"),
            format!("1:{seventeen}"),
        ] {
            let err = input.parse::<Uid128>().unwrap_err();
            assert!(
                matches!(err, ParseError::Overflow { .. }),
                "expected Overflow for {input:?}, got {err}"
            );
        }
    }

    #[test]
    fn test_parse_error_offsets() {
        match "ff-0".parse::<Uid128>().unwrap_err() {
            ParseError::InvalidSeparator { offset, .. } => assert_eq!(offset, 2),
            err => panic!("unexpected error: {err}"),
        }
        match "1:0xyz".parse::<Uid128>().unwrap_err() {
            ParseError::TrailingInput { offset, .. } => assert_eq!(offset, 3),
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn test_roundtrip_spot_checks() {
        let values = [
            Uid128::ZERO,
            Uid128::from_low(1),
            Uid128::from_low(0xff),
            Uid128::from_low(u64::MAX),
            Uid128::from_parts(1, 0),
            Uid128::from_parts(1, 0xff),
            Uid128::from_parts(u64::MAX, 0),
            Uid128::MAX,
        ];
        for v in values {
            assert_eq!(parse(&v.to_string()), v, "roundtrip failed for {v}");
        }
    }
}

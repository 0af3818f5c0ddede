//! Error handling for uid128
//!
//! This module defines the error infrastructure for the crate:
//! - `Uid128Error` trait for consistent error handling
//! - `ParseError` for malformed textual input
//! - `GeneratorError` for random generator initialization failures
//!
//! # Design Principles
//! - All errors implement Send + Sync
//! - thiserror for library errors; no application-level error aggregation
//! - Malformed input surfaces a typed error, never a silently substituted
//!   default value
//! - Arithmetic never errors: it wraps modulo 2^128

use thiserror::Error;

/// Base trait for all uid128-specific errors
///
/// This trait ensures all crate errors are:
/// - Thread-safe (Send + Sync)
/// - Static lifetime (no borrowed data)
/// - Implement the standard Error trait
pub trait Uid128Error: std::error::Error + Send + Sync + 'static {}

/// Errors produced while parsing the canonical text forms
///
/// Parse errors propagate to the immediate caller; there is no internal
/// retry for malformed input.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input has no leading hexadecimal digit to scan
    #[error("no leading hexadecimal digits in {input:?}")]
    NoDigits { input: String },

    /// The byte after the high half is neither ':' nor its escaped form
    #[error("expected ':' separator at byte {offset} in {input:?}")]
    InvalidSeparator { input: String, offset: usize },

    /// A hexadecimal run does not fit in a 64-bit half
    #[error("hexadecimal run at byte {offset} in {input:?} exceeds 64 bits")]
    Overflow { input: String, offset: usize },

    /// Non-hexadecimal bytes remain after the low half
    #[error("trailing non-hexadecimal input at byte {offset} in {input:?}")]
    TrailingInput { input: String, offset: usize },
}

impl Uid128Error for ParseError {}

/// Errors produced by the process-wide random generator
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Seeding from the OS entropy source failed on first use
    #[error("random generator initialization failed: {source}")]
    InitFailed {
        #[source]
        source: rand::Error,
    },
}

impl Uid128Error for GeneratorError {}

/// Utility constructors for parse errors
impl ParseError {
    pub fn no_digits(input: impl Into<String>) -> Self {
        Self::NoDigits {
            input: input.into(),
        }
    }

    pub fn invalid_separator(input: impl Into<String>, offset: usize) -> Self {
        Self::InvalidSeparator {
            input: input.into(),
            offset,
        }
    }

    pub fn overflow(input: impl Into<String>, offset: usize) -> Self {
        Self::Overflow {
            input: input.into(),
            offset,
        }
    }

    pub fn trailing_input(input: impl Into<String>, offset: usize) -> Self {
        Self::TrailingInput {
            input: input.into(),
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::no_digits("zzz");
        let display = format!("{err}");
        assert!(display.contains("no leading hexadecimal digits"));
        assert!(display.contains("zzz"));

        let err = ParseError::invalid_separator("ff-0", 2);
        let display = format!("{err}");
        assert!(display.contains("separator"));
        assert!(display.contains("byte 2"));
    }

    #[test]
    fn test_uid128_error_trait() {
        fn assert_uid128_error(_: impl Uid128Error) {}

        // These compile only if the types implement Uid128Error
        assert_uid128_error(ParseError::no_digits(""));
        assert_uid128_error(ParseError::overflow("f".repeat(17), 0));
    }

    #[test]
    fn test_utility_constructors() {
        match ParseError::trailing_input("1:0xyz", 3) {
            ParseError::TrailingInput { input, offset } => {
                assert_eq!(input, "1:0xyz");
                assert_eq!(offset, 3);
            }
            _ => panic!("Expected TrailingInput variant"),
        }
    }
}

//! Display formatting for identifiers
//!
//! Two renderings exist: the canonical form used for interchange (exact,
//! round-trippable through the parser) and a truncated short form for
//! compact logging (lossy, never an identity).

use std::fmt;

use crate::constants::SHORT_DISPLAY_AFFIX_LEN;
use crate::value::Uid128;

/// Canonical text rendering
///
/// When the high half is zero, only the low half is emitted; otherwise the
/// two halves are joined by `:`. Both halves are lowercase hexadecimal with
/// no leading zeros (a single "0" for zero) and no padding.
///
/// The long form is not fixed width: a low half that would need leading
/// zeros is emitted without them, so `(1, 0xff)` renders as "1:ff" rather
/// than a 32-digit blob. Round-trip through the parser is still exact
/// because the parser consumes the remainder of the string for the low
/// half. Any future fixed-width encoding must change the parser in the
/// same step.
impl fmt::Display for Uid128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high() == 0 {
            write!(f, "{:x}", self.low())
        } else {
            write!(f, "{:x}:{:x}", self.high(), self.low())
        }
    }
}

impl Uid128 {
    /// Returns a short, not necessarily unique, display string
    ///
    /// Both halves are formatted into one hexadecimal blob, without the
    /// separator, and truncated to the first and last three characters.
    /// Blobs of six or fewer characters are returned whole. Intended for
    /// compact logging only; never for identity comparison and never
    /// parseable back into a value.
    pub fn short_display(&self) -> String {
        let blob = format!("{:x}{:x}", self.high(), self.low());
        if blob.len() <= 2 * SHORT_DISPLAY_AFFIX_LEN {
            return blob;
        }
        format!(
            "{}..{}",
            &blob[..SHORT_DISPLAY_AFFIX_LEN],
            &blob[blob.len() - SHORT_DISPLAY_AFFIX_LEN..]
        )
    }
}

//! # uid128
//!
//! Universal 128-bit identifiers for tagging objects, keying hash-based
//! containers, and carrying generated or content-derived unique IDs.
//!
//! ## Key Features
//! - `Uid128` value type with wrapping 128-bit arithmetic and a total order
//! - Canonical hexadecimal text format with a strict parser
//! - Deterministic identifiers derived from byte strings through a
//!   swappable 128-bit digest provider
//! - Process-safe random UUID generation with a non-zero-high guarantee
//! - Stable hashing for sharding and persistent indexes
//!
//! ## Design Principles
//! - Arithmetic is total: overflow wraps, it never errors
//! - Malformed text input surfaces a typed error, never a default value
//! - Trait-based injection seams for the digest and the random generator
//! - Fixed (low, high) serde wire order for cross-version compatibility
//!
//! ## Example
//! ```
//! use uid128::Uid128;
//!
//! let tag = Uid128::named("render/pass/shadow");
//! assert_eq!(tag, tag.to_string().parse::<Uid128>().unwrap());
//!
//! let uuid = Uid128::random().expect("entropy source available");
//! assert!(uuid.is_uuid());
//! ```

pub mod constants;
pub mod digest;
pub mod display;
pub mod error;
pub mod generator;
pub mod hash;
pub mod parse;
pub mod value;

// Re-export the main types at the crate root for convenience
pub use constants::is_canonical;
pub use digest::{Blake3Digest128, Digest128};
pub use error::{GeneratorError, ParseError, Uid128Error};
pub use hash::stable_hash;
pub use value::Uid128;

/// Version of the uid128 crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(VERSION.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_root_reexports() {
        let uid: Uid128 = "1:0".parse().unwrap();
        assert!(uid.is_uuid());
        assert!(is_canonical("1:0"));
        let _ = stable_hash(&uid);
    }
}

//! Deterministic identifier derivation
//!
//! This module maps arbitrary byte strings to stable identifiers through a
//! 128-bit digest capability:
//! - `Digest128`: the provider trait, swappable without touching callers
//! - `Blake3Digest128`: the default provider, BLAKE3 truncated to 128 bits
//!
//! The digest is used only as a deterministic name-to-identifier map, not
//! for security.

use crate::value::Uid128;

/// Capability interface for computing a 128-bit digest of a byte string
///
/// Implementations must be deterministic and free of side effects, with
/// uniformly distributed output. The specific algorithm is an
/// implementation detail of the provider; callers only rely on the
/// contract above.
pub trait Digest128: Send + Sync {
    /// Computes the 128-bit digest of `bytes` as a (high, low) pair
    fn digest128(&self, bytes: &[u8]) -> (u64, u64);
}

/// Default digest provider, backed by BLAKE3
///
/// The 256-bit BLAKE3 output is truncated to its first 16 bytes, split
/// big-endian into the high and low halves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Digest128;

impl Digest128 for Blake3Digest128 {
    fn digest128(&self, bytes: &[u8]) -> (u64, u64) {
        let digest = blake3::hash(bytes);
        let out = digest.as_bytes();
        let mut half = [0u8; 8];
        half.copy_from_slice(&out[..8]);
        let high = u64::from_be_bytes(half);
        half.copy_from_slice(&out[8..16]);
        let low = u64::from_be_bytes(half);
        (high, low)
    }
}

impl Uid128 {
    /// Derives the identifier of an arbitrary byte string
    ///
    /// Pure function over the default digest provider: the same input
    /// always yields the same identifier, and distinct inputs collide only
    /// with the digest's collision probability. No randomness, no shared
    /// state.
    pub fn named(name: impl AsRef<[u8]>) -> Uid128 {
        Self::named_with(&Blake3Digest128, name)
    }

    /// Derives an identifier through a specific digest provider
    pub fn named_with(provider: &dyn Digest128, name: impl AsRef<[u8]>) -> Uid128 {
        let (high, low) = provider.digest128(name.as_ref());
        Uid128::from_parts(high, low)
    }
}

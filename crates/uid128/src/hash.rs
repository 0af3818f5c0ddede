//! Stable hashing for hash-based containers
//!
//! `Uid128` derives `Hash`, which is what std containers consume. This
//! module adds a stable scalar hash whose value does not depend on the
//! process or the container's random state, usable for sharding and
//! persistent indexes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::value::Uid128;

/// Computes a stable 64-bit hash of an identifier
///
/// The result is `hash64(high) XOR hash64(low)` where `hash64` is a
/// fixed-key 64-bit scalar hash. Equal identifiers always hash equal, and
/// the value is stable across processes and runs. No relationship with the
/// identifier ordering is implied.
pub fn stable_hash(uid: &Uid128) -> u64 {
    hash64(uid.high()) ^ hash64(uid.low())
}

// DefaultHasher::new() uses constant keys, unlike the per-instance random
// state HashMap seeds itself with.
fn hash64(half: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    half.hash(&mut hasher);
    hasher.finish()
}

//! The 128-bit identifier value type
//!
//! This module defines `Uid128`, the value type at the core of the crate:
//! - Construction from halves, 64-bit integers, native `u128`, or text
//! - Wrapping 128-bit arithmetic (no overflow errors, ever)
//! - A total order that agrees with equality
//! - A serde representation with a fixed cross-version field order

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, Sub};

/// A 128-bit unsigned identifier stored as two 64-bit halves
///
/// The value represents `high * 2^64 + low`. Any pair of halves is a valid
/// identifier, including zero; no normalization is applied. Values are
/// plain `Copy` scalars and all operators return new values.
///
/// Ordering is lexicographic on `(high, low)`: the high half is compared
/// first, the low half breaks ties. The field declaration order below is
/// what makes the derived `PartialOrd`/`Ord` implement exactly that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uid128 {
    high: u64,
    low: u64,
}

impl Uid128 {
    /// The zero identifier
    pub const ZERO: Uid128 = Uid128 { high: 0, low: 0 };

    /// The largest representable identifier
    pub const MAX: Uid128 = Uid128 {
        high: u64::MAX,
        low: u64::MAX,
    };

    /// Creates an identifier from its two 64-bit halves
    pub const fn from_parts(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Creates an identifier with a zero high half
    pub const fn from_low(low: u64) -> Self {
        Self { high: 0, low }
    }

    /// Returns the high 64 bits
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Returns the low 64 bits
    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Returns true if the value looks like a generated UUID
    ///
    /// The random generator never returns a zero high half, so every value
    /// it produces satisfies this. It is a heuristic, not a guarantee:
    /// digest-derived identifiers may have a nonzero high half as well.
    pub const fn is_uuid(&self) -> bool {
        self.high != 0
    }

    /// Returns true if both halves are zero
    pub const fn is_zero(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Adds one in place, wrapping at 2^128
    pub fn increment(&mut self) -> &mut Self {
        self.low = self.low.wrapping_add(1);
        if self.low == 0 {
            self.high = self.high.wrapping_add(1);
        }
        self
    }

    /// Subtracts one in place, wrapping below zero
    ///
    /// The borrow test must run against the pre-decrement low half.
    pub fn decrement(&mut self) -> &mut Self {
        if self.low == 0 {
            self.high = self.high.wrapping_sub(1);
        }
        self.low = self.low.wrapping_sub(1);
        self
    }

    /// Converts to Rust's native `u128`
    pub const fn as_u128(&self) -> u128 {
        ((self.high as u128) << 64) | self.low as u128
    }

    /// Creates an identifier from a native `u128`
    pub const fn from_u128(value: u128) -> Self {
        Self {
            high: (value >> 64) as u64,
            low: value as u64,
        }
    }
}

/// 128-bit addition with carry; both halves wrap silently
impl Add for Uid128 {
    type Output = Uid128;

    fn add(self, rhs: Uid128) -> Uid128 {
        let low = self.low.wrapping_add(rhs.low);
        // carry iff the low half wrapped
        let high = if low < self.low {
            self.high.wrapping_add(rhs.high).wrapping_add(1)
        } else {
            self.high.wrapping_add(rhs.high)
        };
        Uid128 { high, low }
    }
}

impl AddAssign for Uid128 {
    fn add_assign(&mut self, rhs: Uid128) {
        *self = *self + rhs;
    }
}

/// Single-limb addition with carry propagation into the high half
impl Add<u64> for Uid128 {
    type Output = Uid128;

    fn add(self, rhs: u64) -> Uid128 {
        let low = self.low.wrapping_add(rhs);
        let high = if low < self.low {
            self.high.wrapping_add(1)
        } else {
            self.high
        };
        Uid128 { high, low }
    }
}

/// Single-limb subtraction with borrow propagation into the high half
impl Sub<u64> for Uid128 {
    type Output = Uid128;

    fn sub(self, rhs: u64) -> Uid128 {
        let low = self.low.wrapping_sub(rhs);
        let high = if low > self.low {
            self.high.wrapping_sub(1)
        } else {
            self.high
        };
        Uid128 { high, low }
    }
}

impl BitAnd for Uid128 {
    type Output = Uid128;

    fn bitand(self, rhs: Uid128) -> Uid128 {
        Uid128 {
            high: self.high & rhs.high,
            low: self.low & rhs.low,
        }
    }
}

impl BitOr for Uid128 {
    type Output = Uid128;

    fn bitor(self, rhs: Uid128) -> Uid128 {
        Uid128 {
            high: self.high | rhs.high,
            low: self.low | rhs.low,
        }
    }
}

/// Equality against a bare 64-bit value, by promotion
impl PartialEq<u64> for Uid128 {
    fn eq(&self, other: &u64) -> bool {
        *self == Uid128::from_low(*other)
    }
}

impl PartialEq<Uid128> for u64 {
    fn eq(&self, other: &Uid128) -> bool {
        Uid128::from_low(*self) == *other
    }
}

impl From<u64> for Uid128 {
    fn from(low: u64) -> Self {
        Uid128::from_low(low)
    }
}

impl From<u32> for Uid128 {
    fn from(low: u32) -> Self {
        Uid128::from_low(low as u64)
    }
}

// Negative inputs are reinterpreted as unsigned bit patterns, not rejected.
// `as u64` sign-extends, so -1i32 and -1i64 both produce a low half of all
// ones. Callers rely on this for bit-pattern construction.
impl From<i64> for Uid128 {
    fn from(low: i64) -> Self {
        Uid128::from_low(low as u64)
    }
}

impl From<i32> for Uid128 {
    fn from(low: i32) -> Self {
        Uid128::from_low(low as u64)
    }
}

impl From<Uid128> for u128 {
    fn from(uid: Uid128) -> u128 {
        uid.as_u128()
    }
}

impl From<u128> for Uid128 {
    fn from(value: u128) -> Self {
        Uid128::from_u128(value)
    }
}

// The serialized layout is the ordered pair (low, high), low first. The
// field order is a cross-version wire contract; a derive on this struct
// would emit high first and must not be substituted.
impl Serialize for Uid128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.low)?;
        pair.serialize_element(&self.high)?;
        pair.end()
    }
}

impl<'de> Deserialize<'de> for Uid128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairVisitor;

        impl<'de> Visitor<'de> for PairVisitor {
            type Value = Uid128;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a (low, high) pair of 64-bit unsigned integers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Uid128, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let low: u64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let high: u64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Uid128 { high, low })
            }
        }

        deserializer.deserialize_tuple(2, PairVisitor)
    }
}

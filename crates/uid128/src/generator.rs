//! Process-wide random identifier generation
//!
//! Random identifiers carry a guarantee the deterministic constructors do
//! not: the high half is never zero, which is what makes
//! [`Uid128::is_uuid`] meaningful for values produced here.
//!
//! The generator state is shared by every call in the process and seeded
//! exactly once, lazily, from OS entropy. Its internal state is not safe
//! for unsynchronized mutation, so the whole draw-check-redraw sequence
//! runs under one lock; the lock is never held across calls. Calls are
//! expected to be infrequent (identifier minting), so they serialize
//! process-wide.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::error::GeneratorError;
use crate::value::Uid128;

static GENERATOR: Lazy<Mutex<Option<StdRng>>> = Lazy::new(|| Mutex::new(None));

impl Uid128 {
    /// Generates a random identifier with a non-zero high half
    ///
    /// Draws two independent 64-bit values from the process-wide
    /// generator. A draw whose high half is zero is rejected and both
    /// halves are redrawn; the probability of more than one iteration is
    /// about 2^-64 per draw.
    ///
    /// # Errors
    /// Fails with [`GeneratorError::InitFailed`] if the OS entropy source
    /// is unavailable on first use. Randomness is never silently degraded.
    pub fn random() -> Result<Uid128, GeneratorError> {
        let mut slot = GENERATOR.lock();
        match slot.as_mut() {
            Some(rng) => Ok(draw(rng)),
            None => {
                let mut rng = StdRng::from_rng(OsRng)
                    .map_err(|source| GeneratorError::InitFailed { source })?;
                debug!("seeded process-wide uid generator from OS entropy");
                let value = draw(&mut rng);
                *slot = Some(rng);
                Ok(value)
            }
        }
    }

    /// Generates a random identifier from a caller-supplied generator
    ///
    /// Runs the same rejection loop as [`Uid128::random`] without touching
    /// the process-wide state. Intended for deterministic tests and for
    /// callers that manage their own entropy.
    pub fn random_with(rng: &mut impl RngCore) -> Uid128 {
        draw(rng)
    }
}

/// Draws (high, low) pairs until the high half is non-zero
fn draw(rng: &mut impl RngCore) -> Uid128 {
    loop {
        let high = rng.next_u64();
        let low = rng.next_u64();
        if high != 0 {
            return Uid128::from_parts(high, low);
        }
        trace!("redrawing uid with zero high half");
    }
}

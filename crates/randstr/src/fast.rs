// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared, lock-protected pseudo-random word source.
//!
//! Not suitable for secrets. It backs the fast generators and is the
//! fallback for the secure ones.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::traits::EntropySource;

/// Where the initial seed of a [`FastSource`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOrigin {
    /// Drawn from a secure entropy source.
    Os,
    /// Secure source failed; wall-clock nanoseconds were used instead.
    Clock,
    /// Supplied by the caller.
    Explicit,
}

/// Pseudo-random generator behind a single mutex.
///
/// The lock is taken for exactly one draw or one reseed and released
/// before the caller consumes the word.
pub struct FastSource {
    rng: Mutex<StdRng>,
}

impl FastSource {
    /// Seeds from `secure`, or from the clock if `secure` fails.
    pub fn from_entropy(secure: &dyn EntropySource) -> (Self, SeedOrigin) {
        let mut bytes = [0u8; 8];

        let (seed, origin) = match secure.fill_bytes(&mut bytes) {
            // Top bit cleared: a non-negative i64, like a draw below i64::MAX.
            Ok(()) => ((u64::from_le_bytes(bytes) >> 1) as i64, SeedOrigin::Os),
            Err(_) => (clock_seed(), SeedOrigin::Clock),
        };

        (Self::from_seed(seed), origin)
    }

    /// Deterministic source: equal seeds yield equal word sequences.
    pub fn from_seed(seed: i64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed as u64)),
        }
    }

    /// Replaces the internal state as if freshly built with [`from_seed`](Self::from_seed).
    pub fn reseed(&self, seed: i64) {
        *self.lock() = StdRng::seed_from_u64(seed as u64);
    }

    /// Next 63-bit word; bit 63 is always clear.
    #[inline]
    pub fn next_word(&self) -> u64 {
        self.lock().next_u64() >> 1
    }

    // Every critical section leaves the generator in a valid state, so a
    // panic elsewhere while holding the lock does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for FastSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FastSource").finish_non_exhaustive()
    }
}

fn clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as i64)
        .unwrap_or_default()
}

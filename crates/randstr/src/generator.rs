// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::alphabet::{ALPHANUMERIC, Alphabet, NUMERIC};
use crate::error::EntropyError;
use crate::fast::{FastSource, SeedOrigin};
use crate::sampler::{sample_bytes, sample_words};
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Random string service owning one fast source and one secure source.
///
/// Safe to share between threads. The fast source lock is taken once per
/// 63-bit draw, never for a whole string.
///
/// # Example
///
/// ```rust
/// use randstr::Generator;
///
/// let generator = Generator::new();
///
/// let token = generator.secure_alphanumeric(32);
/// assert_eq!(token.len(), 32);
///
/// let pin = generator.fast_numeric(6);
/// assert!(pin.bytes().all(|b| b.is_ascii_digit()));
/// ```
pub struct Generator {
    fast: FastSource,
    secure: Box<dyn EntropySource>,
    seed_origin: SeedOrigin,
}

impl Generator {
    /// OS-backed secure source; fast source seeded from it.
    pub fn new() -> Self {
        Self::with_secure_source(SystemEntropySource {})
    }

    /// Uses `secure` both for secure strings and to seed the fast source.
    ///
    /// If `secure` fails while seeding, the fast source is seeded from the
    /// wall clock instead.
    pub fn with_secure_source<S>(secure: S) -> Self
    where
        S: EntropySource + 'static,
    {
        let (fast, seed_origin) = FastSource::from_entropy(&secure);

        match seed_origin {
            SeedOrigin::Clock => {
                tracing::warn!("secure seed unavailable, fast source seeded from clock")
            }
            SeedOrigin::Os => tracing::debug!("fast source seeded from secure source"),
            SeedOrigin::Explicit => {}
        }

        Self {
            fast,
            secure: Box::new(secure),
            seed_origin,
        }
    }

    /// OS-backed secure source; deterministic fast source.
    pub fn with_seed(seed: i64) -> Self {
        Self::with_sources(FastSource::from_seed(seed), SystemEntropySource {})
    }

    /// Fully injected sources.
    pub fn with_sources<S>(fast: FastSource, secure: S) -> Self
    where
        S: EntropySource + 'static,
    {
        Self {
            fast,
            secure: Box::new(secure),
            seed_origin: SeedOrigin::Explicit,
        }
    }

    /// How the fast source got its current initial seed.
    pub fn seed_origin(&self) -> SeedOrigin {
        self.seed_origin
    }

    /// `n` alphanumeric symbols from the fast source. Never fails.
    pub fn fast_alphanumeric(&self, n: usize) -> String {
        self.fast(&ALPHANUMERIC, n)
    }

    /// `n` decimal digits from the fast source. Never fails.
    pub fn fast_numeric(&self, n: usize) -> String {
        self.fast(&NUMERIC, n)
    }

    /// `n` alphanumeric symbols from the secure source.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the secure source fails.
    pub fn try_secure_alphanumeric(&self, n: usize) -> Result<String, EntropyError> {
        sample_bytes(&ALPHANUMERIC, n, self.secure.as_ref())
    }

    /// `n` decimal digits from the secure source.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the secure source fails.
    pub fn try_secure_numeric(&self, n: usize) -> Result<String, EntropyError> {
        sample_bytes(&NUMERIC, n, self.secure.as_ref())
    }

    /// Like [`try_secure_alphanumeric`](Self::try_secure_alphanumeric), but
    /// regenerates the whole string from the fast source on failure.
    pub fn secure_alphanumeric(&self, n: usize) -> String {
        self.secure_or_fast(&ALPHANUMERIC, n)
    }

    /// Like [`try_secure_numeric`](Self::try_secure_numeric), but regenerates
    /// the whole string from the fast source on failure.
    pub fn secure_numeric(&self, n: usize) -> String {
        self.secure_or_fast(&NUMERIC, n)
    }

    /// Resets the fast source to the state [`FastSource::from_seed`] gives.
    ///
    /// Meant for reproducible tests; a reseed between two draws of a
    /// concurrent caller is observed by that caller.
    pub fn reseed(&self, seed: i64) {
        self.fast.reseed(seed);
        tracing::trace!("fast source reseeded");
    }

    fn fast(&self, alphabet: &Alphabet, n: usize) -> String {
        sample_words(alphabet, n, || self.fast.next_word())
    }

    fn secure_or_fast(&self, alphabet: &Alphabet, n: usize) -> String {
        match sample_bytes(alphabet, n, self.secure.as_ref()) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(
                    %err,
                    len = n,
                    "secure source failed, falling back to fast source"
                );
                self.fast(alphabet, n)
            }
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Generator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Generator")
            .field("fast", &self.fast)
            .field("seed_origin", &self.seed_origin)
            .finish_non_exhaustive()
    }
}

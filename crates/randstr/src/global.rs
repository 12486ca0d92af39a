// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide [`Generator`] and free-function shortcuts over it.
//!
//! [`initialize`] builds the instance on first call and returns it on every
//! later call. Each shortcut calls it first, so an explicit call at startup
//! only moves the seeding cost out of the first generation.

use std::sync::OnceLock;

use crate::error::EntropyError;
use crate::generator::Generator;

static GENERATOR: OnceLock<Generator> = OnceLock::new();

/// Builds the process-wide generator if needed and returns it. Idempotent.
pub fn initialize() -> &'static Generator {
    GENERATOR.get_or_init(|| {
        let generator = Generator::new();
        tracing::debug!(
            seed_origin = ?generator.seed_origin(),
            "process-wide generator initialized"
        );
        generator
    })
}

/// See [`Generator::fast_alphanumeric`].
pub fn generate_fast_alphanumeric(n: usize) -> String {
    initialize().fast_alphanumeric(n)
}

/// See [`Generator::fast_numeric`].
pub fn generate_fast_numeric(n: usize) -> String {
    initialize().fast_numeric(n)
}

/// See [`Generator::secure_alphanumeric`].
pub fn generate_secure_alphanumeric(n: usize) -> String {
    initialize().secure_alphanumeric(n)
}

/// See [`Generator::secure_numeric`].
pub fn generate_secure_numeric(n: usize) -> String {
    initialize().secure_numeric(n)
}

/// See [`Generator::try_secure_alphanumeric`].
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the OS source fails.
pub fn try_generate_secure_alphanumeric(n: usize) -> Result<String, EntropyError> {
    initialize().try_secure_alphanumeric(n)
}

/// See [`Generator::try_secure_numeric`].
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if the OS source fails.
pub fn try_generate_secure_numeric(n: usize) -> Result<String, EntropyError> {
    initialize().try_secure_numeric(n)
}

/// See [`Generator::reseed`].
pub fn reseed_fast_source(seed: i64) {
    initialize().reseed(seed);
}

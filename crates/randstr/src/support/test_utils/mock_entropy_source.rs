// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// What a [`MockEntropySource`] does on each read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Reads are served by the OS source.
    None,
    /// Reads fail, which sends `secure_*` generators down the fast path.
    FailAtFillBytes,
}

/// OS-backed source that can be switched into a failing state.
///
/// Passed to [`Generator::with_sources`](crate::Generator::with_sources) or
/// [`Generator::with_secure_source`](crate::Generator::with_secure_source) to
/// exercise the fallback and clock-seed paths.
#[derive(Debug)]
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
}

impl MockEntropySource {
    /// Wraps a fresh [`SystemEntropySource`].
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
        }
    }

    /// Switches behaviour for subsequent reads.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        match self.behaviour {
            MockEntropySourceBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAtFillBytes => Err(EntropyError::EntropyNotAvailable),
        }
    }
}

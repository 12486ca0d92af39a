// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Replays a fixed byte script and records the size of every read.
///
/// A read that asks for more bytes than remain fails with
/// [`EntropyError::EntropyNotAvailable`] without consuming anything.
/// Clones share the same script and log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEntropySource {
    script: Arc<Mutex<VecDeque<u8>>>,
    reads: Arc<Mutex<Vec<usize>>>,
}

impl ScriptedEntropySource {
    /// Creates a source that will hand out `bytes` in order.
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            script: Arc::new(Mutex::new(bytes.iter().copied().collect())),
            reads: Arc::default(),
        }
    }

    /// Lengths requested so far, in call order (failed reads included).
    pub fn reads(&self) -> Vec<usize> {
        self.reads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl EntropySource for ScriptedEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.reads
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(dest.len());

        let mut script = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        if script.len() < dest.len() {
            return Err(EntropyError::EntropyNotAvailable);
        }

        let len = dest.len();
        for (slot, byte) in dest.iter_mut().zip(script.drain(..len)) {
            *slot = byte;
        }

        Ok(())
    }
}

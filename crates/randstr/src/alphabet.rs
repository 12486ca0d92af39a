// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed symbol tables and the bit-width parameters derived from them.
//!
//! An [`Alphabet`] pairs an ASCII symbol table with the width of the
//! candidate index sliced out of each random draw. Everything the sampler
//! needs (mask, acceptance threshold, chunks per 63-bit word) is derived at
//! compile time from those two inputs. Only [`ALPHANUMERIC`] and [`NUMERIC`]
//! are exposed.

/// Usable bits in one fast-source draw.
pub const WORD_BITS: u32 = 63;

/// An immutable, duplicate-free ASCII symbol table plus its sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8],
    idx_bits: u32,
    mask: u64,
    threshold: u64,
    chunks_per_word: u32,
}

/// Lowercase, uppercase and digits (62 symbols, 6-bit candidates).
pub const ALPHANUMERIC: Alphabet =
    Alphabet::new(b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890", 6);

/// Decimal digits (10 symbols, 5-bit candidates).
pub const NUMERIC: Alphabet = Alphabet::new(b"1234567890", 5);

impl Alphabet {
    /// Builds an alphabet sampled with `idx_bits`-wide candidates.
    ///
    /// # Panics
    ///
    /// Panics (at compile time for `const` items) if `symbols` is empty, is
    /// not ASCII, repeats a symbol, or does not fit in `2^idx_bits` candidates.
    pub(crate) const fn new(symbols: &'static [u8], idx_bits: u32) -> Self {
        assert!(!symbols.is_empty(), "alphabet cannot be empty");
        assert!(idx_bits > 0 && idx_bits <= 8, "idx_bits must be in 1..=8");

        let range = 1u64 << idx_bits;
        let len = symbols.len() as u64;
        assert!(len <= range, "alphabet does not fit in idx_bits");

        let mut i = 0;
        while i < symbols.len() {
            assert!(symbols[i].is_ascii(), "alphabet must be ASCII");

            let mut j = i + 1;
            while j < symbols.len() {
                assert!(symbols[i] != symbols[j], "alphabet has duplicate symbols");
                j += 1;
            }

            i += 1;
        }

        Self {
            symbols,
            idx_bits,
            mask: range - 1,
            // Largest multiple of `len` not above `range`; candidates at or past
            // it would skew `idx % len` towards the low symbols.
            threshold: (range / len) * len,
            chunks_per_word: WORD_BITS / idx_bits,
        }
    }

    /// Number of symbols.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; construction rejects empty tables.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol table in emission order.
    #[inline(always)]
    pub const fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// Width in bits of one candidate index.
    #[inline(always)]
    pub const fn idx_bits(&self) -> u32 {
        self.idx_bits
    }

    /// `2^idx_bits - 1`.
    #[inline(always)]
    pub const fn mask(&self) -> u64 {
        self.mask
    }

    /// Candidates strictly below this value are accepted.
    #[inline(always)]
    pub const fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Candidates sliced from one 63-bit word before a redraw.
    #[inline(always)]
    pub const fn chunks_per_word(&self) -> u32 {
        self.chunks_per_word
    }

    /// Maps a masked candidate to its symbol, or `None` if it must be rejected.
    #[inline(always)]
    pub fn symbol(&self, candidate: u64) -> Option<u8> {
        if candidate < self.threshold {
            Some(self.symbols[(candidate % self.symbols.len() as u64) as usize])
        } else {
            None
        }
    }
}

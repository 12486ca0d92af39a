// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Rejection sampling of alphabet indices from raw random bits.
//!
//! A candidate is the low `idx_bits` of the current entropy unit. Candidates
//! at or above [`Alphabet::threshold`] are dropped, which leaves every symbol
//! with the same number of accepted candidates and removes modulo bias.
//!
//! # Word path
//!
//! One 63-bit draw yields [`Alphabet::chunks_per_word`] candidates. The word
//! is shifted by `idx_bits` after every candidate, accepted or not, and a new
//! word is drawn only when its chunk budget runs out.
//!
//! # Byte path
//!
//! One byte yields one candidate. Bytes are read into the output buffer
//! itself, sized `n + n/8` to absorb the expected rejections. Accepted
//! symbols overwrite already-consumed bytes at the front; when the unread
//! tail runs dry, only the still-unfilled remainder `buf[filled..]` is
//! refilled.

use crate::alphabet::Alphabet;
use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Builds an `n`-symbol string from 63-bit words produced by `draw`.
pub fn sample_words<F>(alphabet: &Alphabet, n: usize, mut draw: F) -> String
where
    F: FnMut() -> u64,
{
    let mut out = String::with_capacity(n);
    let mut word = 0u64;
    let mut remain = 0u32;

    // ASCII symbols: byte length equals symbol count.
    while out.len() < n {
        if remain == 0 {
            word = draw();
            remain = alphabet.chunks_per_word();
        }

        if let Some(symbol) = alphabet.symbol(word & alphabet.mask()) {
            out.push(char::from(symbol));
        }

        word >>= alphabet.idx_bits();
        remain -= 1;
    }

    out
}

/// Builds an `n`-symbol string from bytes read out of `source`.
///
/// # Errors
///
/// Propagates the first failure of `source`; no partial output is returned.
pub fn sample_bytes(
    alphabet: &Alphabet,
    n: usize,
    source: &dyn EntropySource,
) -> Result<String, EntropyError> {
    let mut buf = vec![0u8; n.saturating_add(n / 8)];
    let mut filled = 0;
    let mut pos = buf.len();

    while filled < n {
        if pos >= buf.len() {
            source.fill_bytes(&mut buf[filled..])?;
            pos = filled;
        }

        let candidate = u64::from(buf[pos]) & alphabet.mask();
        pos += 1;

        if let Some(symbol) = alphabet.symbol(candidate) {
            buf[filled] = symbol;
            filled += 1;
        }
    }

    buf.truncate(n);

    Ok(buf.into_iter().map(char::from).collect())
}

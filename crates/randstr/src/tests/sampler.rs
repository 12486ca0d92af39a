// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::alphabet::{ALPHANUMERIC, NUMERIC};
use crate::error::EntropyError;
use crate::sampler::{sample_bytes, sample_words};
use crate::support::test_utils::{
    MockEntropySource, MockEntropySourceBehaviour, ScriptedEntropySource,
};

// =============================================================================
// sample_words()
// =============================================================================

#[test]
fn test_sample_words_zero_length_never_draws() {
    let s = sample_words(&ALPHANUMERIC, 0, || panic!("draw() must not be called"));

    assert_eq!(s, "");
}

#[test]
fn test_sample_words_reuses_word_for_chunk_budget() {
    let mut draws = 0;
    let s = sample_words(&NUMERIC, 25, || {
        draws += 1;
        0
    });

    assert_eq!(s, "1".repeat(25));
    // 12 candidates per word: 12 + 12 + 1.
    assert_eq!(draws, 3);
}

#[test]
fn test_sample_words_skips_rejected_chunk_without_redraw() {
    // Chunk 0 = 31 (rejected), chunk 1 = 2 ('3'), remaining chunks = 0 ('1').
    let word = 31 | (2 << 5);
    let mut draws = 0;
    let s = sample_words(&NUMERIC, 3, || {
        draws += 1;
        word
    });

    assert_eq!(s, "311");
    assert_eq!(draws, 1);
}

#[test]
fn test_sample_words_redraws_after_all_chunks_rejected() {
    let mut words = [(1u64 << 63) - 1, 0].into_iter();
    let mut draws = 0;
    let s = sample_words(&ALPHANUMERIC, 3, || {
        draws += 1;
        words.next().expect("Failed to draw word")
    });

    assert_eq!(s, "aaa");
    assert_eq!(draws, 2);
}

#[test]
fn test_sample_words_maps_chunks_low_bits_first() {
    // Chunks (low to high): 0 -> 'a', 25 -> 'z', 26 -> 'A', 61 -> '0'.
    let word = 25 << 6 | 26 << 12 | 61 << 18;
    let s = sample_words(&ALPHANUMERIC, 4, || word);

    assert_eq!(s, "azA0");
}

// =============================================================================
// sample_bytes()
// =============================================================================

#[test]
fn test_sample_bytes_zero_length_never_reads() {
    let source = ScriptedEntropySource::new(&[]);
    let s = sample_bytes(&NUMERIC, 0, &source).expect("Failed to sample_bytes()");

    assert_eq!(s, "");
    assert!(source.reads().is_empty());
}

#[test]
fn test_sample_bytes_reads_len_plus_one_eighth() {
    // One rejection (31), high bits masked off (0xE3 -> 3).
    let source = ScriptedEntropySource::new(&[0, 31, 1, 2, 0xE3, 4, 5, 6, 7]);
    let s = sample_bytes(&NUMERIC, 8, &source).expect("Failed to sample_bytes()");

    assert_eq!(s, "12345678");
    assert_eq!(source.reads(), vec![9]);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_sample_bytes_refills_only_missing_remainder() {
    let source = ScriptedEntropySource::new(&[31, 30, 0x3F, 0, 1, 2, 3, 4, 5, 6, 7, 8]);
    let s = sample_bytes(&NUMERIC, 8, &source).expect("Failed to sample_bytes()");

    // 3 rejected of 9: six filled, so the refill asks for 9 - 6 bytes.
    assert_eq!(s, "12345678");
    assert_eq!(source.reads(), vec![9, 3]);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_sample_bytes_alphanumeric_rejects_62_and_63() {
    let source = ScriptedEntropySource::new(&[0, 25, 26, 51, 52, 61, 62, 0x40]);
    let s = sample_bytes(&ALPHANUMERIC, 7, &source).expect("Failed to sample_bytes()");

    assert_eq!(s, "azAZ10a");
    assert_eq!(source.reads(), vec![7, 1]);
}

#[test]
fn test_sample_bytes_keeps_refilling_through_rejection_runs() {
    let mut script = vec![31u8; 9];
    script.extend([31u8; 9]);
    script.extend([9u8; 9]);
    let source = ScriptedEntropySource::new(&script);
    let s = sample_bytes(&NUMERIC, 8, &source).expect("Failed to sample_bytes()");

    assert_eq!(s, "00000000");
    assert_eq!(source.reads(), vec![9, 9, 9]);
}

#[test]
fn test_sample_bytes_propagates_entropy_error() {
    let source = MockEntropySource::new(MockEntropySourceBehaviour::FailAtFillBytes);
    let result = sample_bytes(&ALPHANUMERIC, 16, &source);

    assert!(result.is_err());
    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
}

#[test]
fn test_sample_bytes_propagates_error_on_refill() {
    // First read succeeds but is all rejections; second read runs dry.
    let source = ScriptedEntropySource::new(&[31; 9]);
    let result = sample_bytes(&NUMERIC, 8, &source);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
    assert_eq!(source.reads(), vec![9, 9]);
}

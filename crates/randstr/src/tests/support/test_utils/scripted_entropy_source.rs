// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::ScriptedEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_scripted_entropy_source_replays_in_order() {
    let source = ScriptedEntropySource::new(&[1, 2, 3, 4, 5]);
    let mut first = [0u8; 2];
    let mut second = [0u8; 3];

    source.fill_bytes(&mut first).expect("Failed to fill_bytes() (#0)");
    source.fill_bytes(&mut second).expect("Failed to fill_bytes() (#1)");

    assert_eq!(first, [1, 2]);
    assert_eq!(second, [3, 4, 5]);
    assert_eq!(source.reads(), vec![2, 3]);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_scripted_entropy_source_fails_when_short() {
    let source = ScriptedEntropySource::new(&[1, 2]);
    let mut buf = [0u8; 3];

    let result = source.fill_bytes(&mut buf);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
    assert_eq!(source.remaining(), 2);
    assert_eq!(source.reads(), vec![3]);
}

#[test]
fn test_scripted_entropy_source_clones_share_script() {
    let source = ScriptedEntropySource::new(&[9, 8]);
    let clone = source.clone();
    let mut buf = [0u8; 1];

    clone.fill_bytes(&mut buf).expect("Failed to fill_bytes()");

    assert_eq!(buf, [9]);
    assert_eq!(source.remaining(), 1);
    assert_eq!(source.reads(), vec![1]);
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::DynamicArrayError;
use crate::slots::{VACANT, allocate, doubled, grow, shift_left, shift_right};

// =============================================================================
// allocate()
// =============================================================================

#[test]
fn test_allocate_is_vacant() {
    let slots = allocate(4).expect("Failed to allocate(..)");

    assert_eq!(slots.len(), 4);
    assert!(slots.iter().all(|s| *s == VACANT));
}

#[test]
fn test_allocate_huge_fails() {
    let result = allocate(usize::MAX);

    assert_eq!(
        result,
        Err(DynamicArrayError::AllocationFailed {
            requested: usize::MAX
        })
    );
}

// =============================================================================
// doubled()
// =============================================================================

#[test]
fn test_doubled() {
    assert_eq!(doubled(1), Ok(2));
    assert_eq!(doubled(3), Ok(6));
    assert_eq!(doubled(usize::MAX / 2), Ok(usize::MAX - 1));
}

#[test]
fn test_doubled_overflow() {
    assert_eq!(doubled(usize::MAX / 2 + 1), Err(DynamicArrayError::Overflow));
    assert_eq!(doubled(usize::MAX), Err(DynamicArrayError::Overflow));
}

// =============================================================================
// grow()
// =============================================================================

#[test]
fn test_grow_copies_live_slots_only() {
    let old = ["a", "b", "stale"];

    let grown = grow(&old, 2, 6).expect("Failed to grow(..)");

    assert_eq!(grown.len(), 6);
    assert_eq!(&grown[..2], ["a", "b"]);
    // Slots at and beyond the live count are not carried over
    assert!(grown[2..].iter().all(|s| *s == VACANT));
}

#[test]
fn test_grow_failure_leaves_old_intact() {
    let old = ["a", "b"];

    assert!(grow(&old, 2, usize::MAX).is_err());
    assert_eq!(old, ["a", "b"]);
}

// =============================================================================
// shift_right()
// =============================================================================

#[test]
fn test_shift_right_middle() {
    let mut slots = ["a", "b", "c", VACANT];

    shift_right(&mut slots, 1, 3);

    assert_eq!(slots, ["a", "b", "b", "c"]);
}

#[test]
fn test_shift_right_at_end_is_noop() {
    let mut slots = ["a", "b", VACANT];

    shift_right(&mut slots, 2, 2);

    assert_eq!(slots, ["a", "b", VACANT]);
}

#[test]
fn test_shift_right_does_not_touch_beyond_live() {
    let mut slots = ["a", VACANT, "untouched"];

    shift_right(&mut slots, 0, 1);

    assert_eq!(slots, ["a", "a", "untouched"]);
}

// =============================================================================
// shift_left()
// =============================================================================

#[test]
fn test_shift_left_middle() {
    let mut slots = ["a", "b", "c", VACANT];

    shift_left(&mut slots, 1, 3);

    assert_eq!(slots, ["a", "c", VACANT, VACANT]);
}

#[test]
fn test_shift_left_last_live() {
    let mut slots = ["a", "b", "untouched"];

    shift_left(&mut slots, 1, 2);

    assert_eq!(slots, ["a", VACANT, "untouched"]);
}

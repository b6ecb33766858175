// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};

#[test]
fn test_behaviour_default_is_none() {
    assert_eq!(DynamicArrayBehaviour::default(), DynamicArrayBehaviour::None);
}

#[test]
fn test_fail_at_resize_only_affects_growth() {
    let mut arr = DynamicArray::with_capacity(2).expect("Failed to create array");
    arr.change_behaviour(DynamicArrayBehaviour::FailAtResize);

    // Within capacity: no resize needed
    arr.append("a").expect("Failed to append(..)");
    arr.append("b").expect("Failed to append(..)");

    assert_eq!(
        arr.append("c"),
        Err(DynamicArrayError::AllocationFailed { requested: 4 })
    );
}

#[test]
fn test_failed_append_is_atomic() {
    let mut arr = DynamicArray::with_capacity(1).expect("Failed to create array");
    arr.append("a").expect("Failed to append(..)");
    arr.change_behaviour(DynamicArrayBehaviour::FailAtResize);

    assert!(arr.append("b").is_err());

    assert_eq!(arr.len(), 1);
    assert_eq!(arr.capacity(), 1);
    assert_eq!(arr.as_slice(), ["a"]);
}

#[test]
fn test_failed_insert_is_atomic() {
    let mut arr = DynamicArray::with_capacity(2).expect("Failed to create array");
    arr.append("a").expect("Failed to append(..)");
    arr.append("c").expect("Failed to append(..)");
    arr.change_behaviour(DynamicArrayBehaviour::FailAtResize);

    assert!(arr.insert("b", 1).is_err());

    assert_eq!(arr.len(), 2);
    assert_eq!(arr.capacity(), 2);
    assert_eq!(arr.as_slice(), ["a", "c"]);
}

#[test]
fn test_behaviour_is_sticky_until_reset() {
    let mut arr = DynamicArray::with_capacity(1).expect("Failed to create array");
    arr.append("a").expect("Failed to append(..)");
    arr.change_behaviour(DynamicArrayBehaviour::FailAtResize);

    assert!(arr.append("b").is_err());
    assert!(arr.insert("b", 0).is_err());

    arr.change_behaviour(DynamicArrayBehaviour::None);
    arr.insert("b", 0).expect("Failed to insert(..)");

    assert_eq!(arr.as_slice(), ["b", "a"]);
    assert_eq!(arr.capacity(), 2);
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting failures in `DynamicArray` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to exercise allocation-failure paths that are otherwise unreachable.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// use dynarr::{DynamicArray, DynamicArrayBehaviour, DynamicArrayError};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut arr = DynamicArray::with_capacity(1)?;
///     arr.append("a")?;
///
///     arr.change_behaviour(DynamicArrayBehaviour::FailAtResize);
///     assert!(arr.append("b").is_err());
///     assert_eq!(arr.as_slice(), ["a"]);
///
///     arr.change_behaviour(DynamicArrayBehaviour::None);
///     arr.append("b")?;
///     assert_eq!(arr.as_slice(), ["a", "b"]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DynamicArrayBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every resize fails with `AllocationFailed` before touching storage.
    FailAtResize,
}

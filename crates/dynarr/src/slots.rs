// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw slot storage backing `DynamicArray`.
//!
//! A slot buffer is a boxed slice whose length is the array capacity. Only the
//! leading `count` slots are live; the rest hold [`VACANT`] and are never read.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::DynamicArrayError;

/// Placeholder stored in slots beyond the live region.
pub(crate) const VACANT: &str = "";

/// Allocates `capacity` vacant slots.
pub(crate) fn allocate<'a>(capacity: usize) -> Result<Box<[&'a str]>, DynamicArrayError> {
    let mut slots: Vec<&'a str> = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| DynamicArrayError::AllocationFailed {
            requested: capacity,
        })?;
    slots.resize(capacity, VACANT);

    Ok(slots.into_boxed_slice())
}

/// Returns the capacity after one doubling step.
#[inline]
pub(crate) fn doubled(capacity: usize) -> Result<usize, DynamicArrayError> {
    capacity.checked_mul(2).ok_or(DynamicArrayError::Overflow)
}

/// Allocates `capacity` slots and copies the `live` leading slots of `old` into them.
///
/// The old buffer is left untouched so a failed allocation loses nothing.
pub(crate) fn grow<'a>(
    old: &[&'a str],
    live: usize,
    capacity: usize,
) -> Result<Box<[&'a str]>, DynamicArrayError> {
    debug_assert!(live <= old.len());
    debug_assert!(old.len() <= capacity);

    let mut slots = allocate(capacity)?;
    slots[..live].copy_from_slice(&old[..live]);

    Ok(slots)
}

/// Opens a hole at `index` by moving `[index, live)` one slot to the right.
///
/// Requires `live < slots.len()` and `index <= live`.
#[inline]
pub(crate) fn shift_right(slots: &mut [&str], index: usize, live: usize) {
    debug_assert!(live < slots.len());
    debug_assert!(index <= live);

    slots.copy_within(index..live, index + 1);
}

/// Closes the hole at `index` by moving `(index, live)` one slot to the left.
///
/// The slot vacated at `live - 1` is reset to [`VACANT`].
#[inline]
pub(crate) fn shift_left(slots: &mut [&str], index: usize, live: usize) {
    debug_assert!(index < live);
    debug_assert!(live <= slots.len());

    slots.copy_within(index + 1..live, index);
    slots[live - 1] = VACANT;
}

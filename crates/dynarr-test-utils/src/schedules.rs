// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Insertion schedules.
//!
//! A schedule of length `n` is a sequence `s` with `s[i] ∈ [0, i]`: the
//! position at which the `i`-th element is inserted into an array that holds
//! `i` elements. Every final ordering of `n` distinct elements is produced by
//! exactly one schedule, so there are `n!` of them.

fn extend<F>(schedule: &mut Vec<usize>, len: usize, callback: &mut F)
where
    F: FnMut(&[usize]),
{
    let step = schedule.len();
    if step == len {
        callback(schedule);
        return;
    }

    for position in 0..=step {
        schedule.push(position);
        extend(schedule, len, callback);
        schedule.pop();
    }
}

/// Calls `callback` once for every insertion schedule of length `len`.
///
/// # Example
/// ```
/// use dynarr_test_utils::insert_schedules;
///
/// let mut seen = Vec::new();
/// insert_schedules(3, |s| seen.push(s.to_vec()));
///
/// assert_eq!(seen.len(), 6);
/// assert!(seen.iter().all(|s| s[0] == 0 && s[1] <= 1 && s[2] <= 2));
/// ```
pub fn insert_schedules<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    let mut schedule = Vec::with_capacity(len);
    extend(&mut schedule, len, &mut callback);
}

/// Replays `schedule` on a plain `Vec`, giving the expected final ordering.
///
/// # Example
/// ```
/// use dynarr_test_utils::apply_schedule;
///
/// let order = apply_schedule(&["a", "b", "c"], &[0, 0, 1]);
/// assert_eq!(order, ["b", "c", "a"]);
/// ```
pub fn apply_schedule<T: Clone>(items: &[T], schedule: &[usize]) -> Vec<T> {
    debug_assert_eq!(items.len(), schedule.len());

    let mut model = Vec::with_capacity(items.len());
    for (item, &position) in items.iter().zip(schedule) {
        model.insert(position, item.clone());
    }
    model
}

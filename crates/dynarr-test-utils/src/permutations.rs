// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Removal orders for exhaustive testing.

/// Calls `callback` once for every ordering of `[0, 1, ..., len-1]`.
///
/// Orderings are produced by the iterative form of Heap's algorithm, so each
/// one differs from the previous by a single swap. Used to drive removals in
/// every possible order.
///
/// # Example
/// ```
/// use dynarr_test_utils::index_permutations;
///
/// let mut count = 0;
/// index_permutations(3, |_order| {
///     count += 1;
/// });
/// assert_eq!(count, 6); // 3! = 6
/// ```
pub fn index_permutations<F>(len: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    if len == 0 {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    // counters[k] = swaps already performed at depth k
    let mut counters = vec![0usize; len];
    callback(&order);

    let mut k = 1;
    while k < len {
        if counters[k] < k {
            let other = if k % 2 == 0 { 0 } else { counters[k] };
            order.swap(other, k);
            callback(&order);

            counters[k] += 1;
            k = 1;
        } else {
            counters[k] = 0;
            k += 1;
        }
    }
}

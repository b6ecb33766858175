// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Returns `n` distinct element labels: `"e0"`, `"e1"`, ...
///
/// # Example
/// ```
/// use dynarr_test_utils::labels;
///
/// assert_eq!(labels(3), ["e0", "e1", "e2"]);
/// ```
pub fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("e{i}")).collect()
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Returns every permutation of `0..n`, generated with Heap's algorithm.
///
/// The first permutation is the identity. The result has `n!` entries, so
/// keep `n` small (8 already yields 40320).
///
/// # Example
///
/// ```rust
/// use dynlist_test_utils::index_permutations;
///
/// let perms = index_permutations(3);
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![0, 1, 2]);
/// ```
pub fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..n).collect();
    let mut result = vec![current.clone()];
    let mut counters = vec![0usize; n];
    let mut i = 1;

    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                current.swap(0, i);
            } else {
                current.swap(counters[i], i);
            }

            result.push(current.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    result
}

/// Reorders `values` so that position `k` holds `values[permutation[k]]`.
///
/// # Panics
///
/// Panics if `permutation` refers to an index outside `values`.
pub fn apply_permutation<T: Clone>(values: &[T], permutation: &[usize]) -> Vec<T> {
    permutation.iter().map(|&idx| values[idx].clone()).collect()
}

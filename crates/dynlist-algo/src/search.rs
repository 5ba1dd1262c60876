// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Searches over ascending slices.
//!
//! The sorted precondition is not verified. On unsorted input the result is
//! unspecified, but every index read stays in bounds.

/// Finds `value` by iterative midpoint bisection.
///
/// Returns the index of a matching element, or `None` if there is none.
///
/// # Example
///
/// ```rust
/// use dynlist_algo::binary_search;
///
/// let data = [1, 3, 5, 7, 9, 11];
/// assert_eq!(binary_search(&data, &7), Some(3));
/// assert_eq!(binary_search(&data, &8), None);
/// ```
pub fn binary_search<T: PartialOrd>(slice: &[T], value: &T) -> Option<usize> {
    if slice.is_empty() {
        return None;
    }

    let mut start = 0;
    let mut end = slice.len() - 1;

    while start <= end {
        let pivot = start + (end - start) / 2;

        if slice[pivot] == *value {
            return Some(pivot);
        }

        if *value < slice[pivot] {
            if pivot == 0 {
                return None;
            }
            end = pivot - 1;
        } else {
            start = pivot + 1;
        }
    }

    None
}

/// Finds `value` using Fibonacci-sized probes.
///
/// Keeps three consecutive Fibonacci numbers, starting from the smallest one
/// `>= len`, and an eliminated prefix of the slice. Each probe lands
/// `fib(m - 2)` elements past the prefix and either grows the prefix or
/// shrinks the window. Once the window collapses to a single element, the
/// element right after the prefix is compared. O(log n) comparisons, with
/// only additions and subtractions for index arithmetic.
pub fn fibonacci_search<T: PartialOrd>(slice: &[T], value: &T) -> Option<usize> {
    let len = slice.len();
    if len == 0 {
        return None;
    }

    let mut fib_m2: usize = 0;
    let mut fib_m1: usize = 1;
    let mut fib_m = fib_m1 + fib_m2;

    while fib_m < len {
        fib_m2 = fib_m1;
        fib_m1 = fib_m;
        fib_m = fib_m1 + fib_m2;
    }

    // Number of leading elements known to be < value.
    let mut eliminated = 0;

    // fib_m > 1 implies fib_m2 >= 1, so the probe never underflows.
    while fib_m > 1 {
        let probe = (eliminated + fib_m2 - 1).min(len - 1);

        if slice[probe] < *value {
            fib_m = fib_m1;
            fib_m1 = fib_m2;
            fib_m2 = fib_m - fib_m1;
            eliminated = probe + 1;
        } else if slice[probe] > *value {
            fib_m = fib_m2;
            fib_m1 -= fib_m2;
            fib_m2 = fib_m - fib_m1;
        } else {
            return Some(probe);
        }
    }

    if fib_m1 != 0 && eliminated < len && slice[eliminated] == *value {
        return Some(eliminated);
    }

    None
}

/// Finds `value` by jumping `floor(sqrt(len))` elements at a time.
///
/// Jumps until the last element of the current block is no longer smaller
/// than `value`, then scans that block linearly. O(sqrt(n)) comparisons.
pub fn jump_search<T: PartialOrd>(slice: &[T], value: &T) -> Option<usize> {
    let len = slice.len();
    if len == 0 {
        return None;
    }

    let block = len.isqrt();
    let mut prev = 0;
    let mut step = block;

    while slice[step.min(len) - 1] < *value {
        prev = step;
        step += block;

        if prev >= len {
            return None;
        }
    }

    while slice[prev] < *value {
        prev += 1;

        if prev == step.min(len) {
            return None;
        }
    }

    (slice[prev] == *value).then_some(prev)
}

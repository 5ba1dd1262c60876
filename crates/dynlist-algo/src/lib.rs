// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place sorting and searching over slices.
//!
//! Every algorithm works on a plain `&mut [T]` / `&[T]` with `T: PartialOrd`,
//! never allocates, and knows nothing about how the slice's storage grows.
//! `dynlist` exposes them as methods over the live range of a `DynList`.
//!
//! # Sorting
//!
//! - [`quick_sort`]: Lomuto partition, last element as pivot
//! - [`cocktail_shaker_sort`]: bidirectional bubble sort with early exit
//! - [`insertion_sort`]: classic in-place insertion
//! - [`heap_sort`]: bottom-up max-heapify, then repeated root extraction
//!
//! None of the sorts are stable.
//!
//! # Searching
//!
//! - [`binary_search`]: midpoint bisection
//! - [`fibonacci_search`]: Fibonacci-sized probes
//! - [`jump_search`]: `sqrt(len)` block jumps followed by a linear scan
//!
//! All searches require the slice to be sorted ascending. On unsorted input
//! the returned index is unspecified (but never out of bounds), and a miss is
//! reported as `None`.
//!
//! # Example
//!
//! ```rust
//! use dynlist_algo::{binary_search, quick_sort};
//!
//! let mut data = [9, 3, 7, 1, 5];
//! quick_sort(&mut data);
//!
//! assert_eq!(data, [1, 3, 5, 7, 9]);
//! assert_eq!(binary_search(&data, &7), Some(3));
//! assert_eq!(binary_search(&data, &4), None);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod search;
mod sort;

pub use algorithm::{SearchAlgorithm, SortAlgorithm};
pub use search::{binary_search, fibonacci_search, jump_search};
pub use sort::{cocktail_shaker_sort, heap_sort, insertion_sort, is_sorted, quick_sort};

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded dynamic array with an explicit capacity policy and in-place
//! sorts and searches.
//!
//! [`DynList<T>`] owns a contiguous buffer and manages its capacity itself
//! rather than leaving it to `Vec`'s amortized growth.
//!
//! # Core Guarantees
//!
//! - **Bounded capacity**: capacity stays within `[1, max_capacity]`
//!   (500 by default, configurable through [`ListConfig`]).
//! - **Explicit policy**: a full list doubles; a list that drains below
//!   `capacity / 2 - 2` (with `capacity > 5`) gives back half its slots. The
//!   thresholds live in [`policy`].
//! - **No silent failures**: pushes and inserts report a
//!   [`MutationOutcome`]. A push into a list that is full at its ceiling, or
//!   an insert past the end, drops the value and says so.
//! - **Deep copies**: `clone()` and `clone_from()` never share storage.
//!
//! # Example: Growth and Shrink
//!
//! ```rust
//! use dynlist::{DynList, MutationOutcome};
//!
//! let mut list = DynList::with_capacity(10);
//! for i in 0..6 {
//!     assert_eq!(list.push(i), MutationOutcome::Stored);
//! }
//!
//! for _ in 0..4 {
//!     list.pop();
//! }
//!
//! // 2 < 10 / 2 - 2, so half the slots were given back.
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.capacity(), 5);
//! ```
//!
//! # Example: Sorting and Searching
//!
//! ```rust
//! use dynlist::{DynList, SearchAlgorithm, SortAlgorithm};
//!
//! let mut list: DynList<i32> = [11, 3, 9, 1, 7, 5].into_iter().collect();
//! list.sort_with(SortAlgorithm::Heap);
//! assert_eq!(list.as_slice(), &[1, 3, 5, 7, 9, 11]);
//!
//! for algorithm in SearchAlgorithm::ALL {
//!     assert_eq!(list.search_with(algorithm, &7), Some(3));
//!     assert_eq!(list.search_with(algorithm, &8), None);
//! }
//! ```
//!
//! # Example: Bounds Errors
//!
//! ```rust
//! use dynlist::{DynList, ListError};
//!
//! let list: DynList<u8> = [1, 2, 3].into_iter().collect();
//! assert_eq!(list.try_get(1), Ok(&2));
//! assert_eq!(
//!     list.try_get(3),
//!     Err(ListError::IndexOutOfBounds { index: 3, len: 3 })
//! );
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod config;
mod dyn_list;
mod error;
mod outcome;
mod render;

pub mod policy;

pub use config::ListConfig;
pub use dyn_list::DynList;
pub use error::ListError;
pub use outcome::MutationOutcome;
pub use render::Details;

pub use dynlist_algo::{SearchAlgorithm, SortAlgorithm};

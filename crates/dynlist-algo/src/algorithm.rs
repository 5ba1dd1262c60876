// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::search::{binary_search, fibonacci_search, jump_search};
use crate::sort::{cocktail_shaker_sort, heap_sort, insertion_sort, quick_sort};

/// The in-place sorts provided by this crate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    /// [`quick_sort`](crate::quick_sort)
    Quick,
    /// [`cocktail_shaker_sort`](crate::cocktail_shaker_sort)
    CocktailShaker,
    /// [`insertion_sort`](crate::insertion_sort)
    Insertion,
    /// [`heap_sort`](crate::heap_sort)
    Heap,
}

impl SortAlgorithm {
    /// Every sort, in declaration order.
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Quick,
        SortAlgorithm::CocktailShaker,
        SortAlgorithm::Insertion,
        SortAlgorithm::Heap,
    ];

    /// Short, stable name used in test output and benchmark ids.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::CocktailShaker => "cocktail_shaker",
            Self::Insertion => "insertion",
            Self::Heap => "heap",
        }
    }

    /// Sorts `slice` ascending with this algorithm.
    pub fn sort<T: PartialOrd>(self, slice: &mut [T]) {
        match self {
            Self::Quick => quick_sort(slice),
            Self::CocktailShaker => cocktail_shaker_sort(slice),
            Self::Insertion => insertion_sort(slice),
            Self::Heap => heap_sort(slice),
        }
    }
}

/// The searches over ascending slices provided by this crate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SearchAlgorithm {
    /// [`binary_search`](crate::binary_search)
    Binary,
    /// [`fibonacci_search`](crate::fibonacci_search)
    Fibonacci,
    /// [`jump_search`](crate::jump_search)
    Jump,
}

impl SearchAlgorithm {
    /// Every search, in declaration order.
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Binary,
        SearchAlgorithm::Fibonacci,
        SearchAlgorithm::Jump,
    ];

    /// Short, stable name used in test output and benchmark ids.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Fibonacci => "fibonacci",
            Self::Jump => "jump",
        }
    }

    /// Searches the ascending `slice` for `value` with this algorithm.
    pub fn search<T: PartialOrd>(self, slice: &[T], value: &T) -> Option<usize> {
        match self {
            Self::Binary => binary_search(slice, value),
            Self::Fibonacci => fibonacci_search(slice, value),
            Self::Jump => jump_search(slice, value),
        }
    }
}

impl core::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

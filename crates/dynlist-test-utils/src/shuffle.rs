// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Returns the deterministic generator behind [`shuffle_with_seed`].
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffles `data` in place (Fisher-Yates) with a generator seeded from
/// `seed`.
///
/// The same seed always yields the same order.
///
/// # Example
///
/// ```rust
/// use dynlist_test_utils::shuffle_with_seed;
///
/// let mut data: Vec<u32> = (0..16).collect();
/// shuffle_with_seed(&mut data, 0x1234567890ABCDEF);
///
/// let mut sorted = data.clone();
/// sorted.sort();
/// assert_eq!(sorted, (0..16).collect::<Vec<_>>());
/// ```
pub fn shuffle_with_seed<T>(data: &mut [T], seed: u64) {
    data.shuffle(&mut seeded_rng(seed));
}

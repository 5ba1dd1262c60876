// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for dynlist crates.
//!
//! - [`index_permutations`] / [`apply_permutation`]: exhaustive orderings of
//!   small inputs, for checking sorts against every arrangement.
//! - [`shuffle_with_seed`] / [`seeded_rng`]: reproducible shuffles of larger
//!   inputs on a seeded `rand` generator.
//!
//! ## License
//!
//! GPL-3.0-only

mod permutations;
mod shuffle;

pub use permutations::{apply_permutation, index_permutations};
pub use shuffle::{seeded_rng, shuffle_with_seed};

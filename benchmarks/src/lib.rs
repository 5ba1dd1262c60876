// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared helpers for the dynlist benchmarks.

use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::WallTime;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed so every run measures the same inputs.
pub const SEED: u64 = 0x5EED_0F_D15C;

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

/// Applies the measurement settings shared by every group.
pub fn configure_group(group: &mut BenchmarkGroup<'_, WallTime>) {
    if is_fast_mode() {
        group.measurement_time(Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(Duration::from_secs(3));
        group.sample_size(50);
    }
}

/// `len` values drawn uniformly from `0..len * 4`.
pub fn random_values(len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let upper = (len as u32).saturating_mul(4).max(1);

    (0..len).map(|_| rng.random_range(0..upper)).collect()
}

/// `len` ascending values drawn from `0..len * 4`.
pub fn sorted_values(len: usize) -> Vec<u32> {
    let mut values = random_values(len);
    values.sort_unstable();
    values
}

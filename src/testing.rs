// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test fixtures shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical sample inputs so every test agrees on them.

#![doc(hidden)]

/// The classic demo list: duplicates, unsorted, eleven elements.
pub const SAMPLE: [i64; 11] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];

/// [`SAMPLE`] sorted ascending.
pub const SAMPLE_SORTED: [i64; 11] = [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9];

/// `0..n` as a vector, the worst case for reaching the last element.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// Ascending values with every element repeated `copies` times.
pub fn ascending_with_duplicates(distinct: usize, copies: usize) -> Vec<i64> {
    (0..distinct as i64)
        .flat_map(|v| std::iter::repeat(v).take(copies))
        .collect()
}

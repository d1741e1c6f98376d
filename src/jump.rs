// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jump search: skip ahead in blocks of `floor(sqrt(n))`, then scan.
//!
//! Phase one hops from block end to block end until it lands on an element
//! that is not less than the target. Phase two walks forward inside that
//! block one element at a time. O(sqrt(n)) comparisons overall.
//!
//! ```text
//!   n = 11, block = 3
//!
//!   [1 1 2 | 3 3 4 | 5 5 5 | 6 9]
//!        ^       ^       ^    ^
//!        hop     hop     hop  stop (9 >= 6), scan from index 9
//! ```
//!
//! The block size is recomputed from `n` on every hop rather than cached,
//! and the counted variant adds one unconditional "final comparison" after
//! the scan. Both details are observable through the comparison counts, so
//! they stay exactly as they are.
//!
//! Empty slices are answered up front: the hop test reads
//! `arr[min(step, n) - 1]`, which has no meaning when `n == 0`.

use crate::contracts::{check_comparison_bound, check_match};
use crate::types::Probe;

/// Block size for a slice of `n` elements: the square root, truncated.
#[inline]
fn block_size(n: usize) -> usize {
    (n as f64).sqrt() as usize
}

/// Find `target` in an ascending slice by block hopping.
///
/// # Example
///
/// ```
/// use sift::jump_search;
///
/// let sorted: Vec<u32> = (0..100_000).collect();
/// assert_eq!(jump_search(&sorted, &99_999), Some(99_999));
/// assert_eq!(jump_search(&sorted, &100_000), None);
/// ```
pub fn jump_search<T: PartialOrd>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }

    let mut step = block_size(n);
    let mut prev = 0;

    // Find the block that can hold the target
    while arr[step.min(n) - 1] < *target {
        prev = step;
        step += block_size(n);
        if prev >= n {
            return None;
        }
    }

    // Linear scan inside the block
    while arr[prev] < *target {
        prev += 1;
        if prev == step.min(n) {
            return None;
        }
    }

    if arr[prev] == *target {
        check_match(arr, prev, target);
        Some(prev)
    } else {
        None
    }
}

/// Jump search that counts comparisons.
///
/// One comparison per executed hop, one per executed scan step, plus one
/// final comparison once the scan loop exits (even if it never ran). An
/// early exit from either loop skips the final comparison. Empty input is
/// `Probe::missing(0)`.
pub fn jump_search_with_counter<T: PartialOrd>(arr: &[T], target: &T) -> Probe {
    let n = arr.len();
    if n == 0 {
        return Probe::missing(0);
    }

    let mut step = block_size(n);
    let mut prev = 0;
    let mut comparisons = 0;

    while prev < n && arr[step.min(n) - 1] < *target {
        comparisons += 1;
        prev = step;
        step += block_size(n);
        if prev >= n {
            return Probe::missing(comparisons);
        }
    }

    while prev < n && arr[prev] < *target {
        comparisons += 1;
        prev += 1;
        if prev == step.min(n) {
            return Probe::missing(comparisons);
        }
    }

    comparisons += 1; // final comparison
    check_comparison_bound("jump search", comparisons, n + 1);

    if prev < n && arr[prev] == *target {
        check_match(arr, prev, target);
        Probe::found(prev, comparisons)
    } else {
        Probe::missing(comparisons)
    }
}

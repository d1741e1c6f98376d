// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for search results.
//!
//! Debug-mode assertions that verify what each search promises about its
//! *output*. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Never check the *input* sortedness precondition (callers own that)
//!
//! # Contract Table
//!
//! | Contract Function              | Property                                   |
//! |--------------------------------|--------------------------------------------|
//! | `check_match`                  | a reported index points at the target      |
//! | `check_all_matches`            | all-indices result is ascending and exact  |
//! | `check_insertion_point_bounds` | `0 <= k <= n`                              |
//! | `check_comparison_bound`       | counted probes stay within their budget    |
//!
//! # Usage
//!
//! ```ignore
//! use sift::contracts::*;
//!
//! // In debug builds, this panics if the result is malformed
//! check_match(arr, index, target);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// MATCH CONTRACTS
// ============================================================================

/// Check that a reported match points at an element equal to the target.
///
/// # Panics (debug builds only)
/// Panics if `index >= arr.len()` or `arr[index] != target`.
#[inline]
pub fn check_match<T: PartialOrd>(arr: &[T], index: usize, target: &T) {
    debug_assert!(
        index < arr.len(),
        "Contract violation: match index {} >= len {}",
        index,
        arr.len()
    );

    if index < arr.len() {
        debug_assert!(
            arr[index] == *target,
            "Contract violation: arr[{}] is not equal to the target",
            index
        );
    }
}

/// Check an all-indices result: strictly ascending, every entry a match.
///
/// Completeness (no match skipped) is left to the property tests, since it
/// costs a second scan.
#[inline]
pub fn check_all_matches<T: PartialOrd>(arr: &[T], indices: &[usize], target: &T) {
    for pair in indices.windows(2) {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: indices not ascending ({} then {})",
            pair[0],
            pair[1]
        );
    }
    for &i in indices {
        check_match(arr, i, target);
    }
}

// ============================================================================
// BINARY SEARCH CONTRACTS
// ============================================================================

/// Check insertion point bounds.
///
/// An insertion point may equal `len` (append), never exceed it.
#[inline]
pub fn check_insertion_point_bounds(result: usize, len: usize) {
    debug_assert!(
        result <= len,
        "Contract violation: insertion point {} > len {}",
        result,
        len
    );
}

// ============================================================================
// COMPARISON BUDGET CONTRACTS
// ============================================================================

/// Check that a counted search did not exceed its comparison budget.
///
/// `bound` is algorithm specific: `n` for linear search,
/// `floor(log2(n)) + 1` for binary search, `n + 1` for jump search.
#[inline]
pub fn check_comparison_bound(algorithm: &str, comparisons: usize, bound: usize) {
    debug_assert!(
        comparisons <= bound,
        "Contract violation: {} made {} comparisons, bound is {}",
        algorithm,
        comparisons,
        bound
    );
}

/// Upper bound on binary search iterations over `n` elements.
#[inline]
pub fn binary_search_budget(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n.ilog2() as usize + 1
    }
}

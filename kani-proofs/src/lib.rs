// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the sift searches.
//!
//! Bounded proofs over every slice of up to `MAX_LEN` symbolic bytes, sorted
//! or not.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: none of the searches index out of bounds, on any input
//! 2. **Bounds**: insertion points stay in `0..=n`
//! 3. **Soundness**: a reported index always holds the target
//! 4. **Budgets**: jump search makes at most `n + 1` comparisons, binary
//!    search at most `floor(log2(n)) + 1`

/// Largest slice the proofs consider.
pub const MAX_LEN: usize = 8;

/// Binary search iteration budget for `n` elements.
pub fn binary_budget(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n.ilog2() as usize + 1
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;
    use sift::{
        binary_search_insertion_point, binary_search_with_counter, jump_search,
        jump_search_with_counter,
    };

    /// A symbolic slice of length `0..=MAX_LEN`.
    fn any_slice(buf: &mut [u8; MAX_LEN]) -> &[u8] {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        for i in 0..MAX_LEN {
            buf[i] = kani::any();
        }
        &buf[..len]
    }

    /// Jump search never panics and only reports real matches.
    #[kani::proof]
    #[kani::unwind(10)] // MAX_LEN + 2
    fn verify_jump_search_no_panic() {
        let mut buf = [0u8; MAX_LEN];
        let arr = any_slice(&mut buf);
        let target: u8 = kani::any();

        if let Some(i) = jump_search(arr, &target) {
            kani::assert(i < arr.len(), "jump_search index must be in bounds");
            kani::assert(arr[i] == target, "jump_search index must hold the target");
        }
    }

    /// Counted jump search stays within n + 1 comparisons.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_jump_counter_budget() {
        let mut buf = [0u8; MAX_LEN];
        let arr = any_slice(&mut buf);
        let target: u8 = kani::any();

        let probe = jump_search_with_counter(arr, &target);
        kani::assert(
            probe.comparisons <= arr.len() + 1,
            "jump search must make at most n + 1 comparisons",
        );
        if arr.is_empty() {
            kani::assert(probe.comparisons == 0, "empty input makes no comparisons");
        }
    }

    /// Insertion point is always in 0..=n.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_insertion_point_bounds() {
        let mut buf = [0u8; MAX_LEN];
        let arr = any_slice(&mut buf);
        let target: u8 = kani::any();

        let k = binary_search_insertion_point(arr, &target);
        kani::assert(k <= arr.len(), "insertion point must not exceed len");
    }

    /// Counted binary search respects the logarithmic budget.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_binary_counter_budget() {
        let mut buf = [0u8; MAX_LEN];
        let arr = any_slice(&mut buf);
        let target: u8 = kani::any();

        let probe = binary_search_with_counter(arr, &target);
        kani::assert(
            probe.comparisons <= binary_budget(arr.len()),
            "binary search must stay within floor(log2(n)) + 1 comparisons",
        );
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for precondition violations.
//!
//! Binary and jump search are only correct on sorted input, but they must
//! stay in bounds on anything. Feeds raw, unsorted slices straight in.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::{
    binary_search_insertion_point, binary_search_with_counter, jump_search,
    jump_search_with_counter, linear_search_with_counter,
};

fuzz_target!(|data: &[u8]| {
    let Some((&target, arr)) = data.split_first() else {
        return;
    };

    // Property 1: nothing panics, insertion point in range
    assert!(binary_search_insertion_point(arr, &target) <= arr.len());

    // Property 2: any reported index really holds the target
    for probe in [
        linear_search_with_counter(arr, &target),
        binary_search_with_counter(arr, &target),
        jump_search_with_counter(arr, &target),
    ] {
        if let Some(i) = probe.index {
            assert_eq!(arr[i], target);
        }
    }
    if let Some(i) = jump_search(arr, &target) {
        assert_eq!(arr[i], target);
    }

    // Property 3: the linear scan is exact regardless of order
    assert_eq!(
        linear_search_with_counter(arr, &target).index,
        arr.iter().position(|&x| x == target)
    );
});

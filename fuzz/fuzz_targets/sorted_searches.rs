// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the searches on sorted input.
//!
//! Sorts whatever the fuzzer hands us, then checks that every search agrees
//! with a linear scan of the same slice.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift::{
    binary_search_insertion_point, binary_search_with_counter, find_all_indices, jump_search,
    jump_search_with_counter,
};

#[derive(Arbitrary, Debug)]
struct Input {
    values: Vec<i16>,
    target: i16,
}

fuzz_target!(|input: Input| {
    let mut arr = input.values;
    arr.sort_unstable();
    let target = input.target;

    let present = !find_all_indices(&arr, &target).is_empty();
    let smaller = arr.iter().filter(|&&x| x < target).count();

    // Binary search: found iff present, insertion point consistent
    let binary = binary_search_with_counter(&arr, &target);
    assert_eq!(binary.is_found(), present);
    let k = binary_search_insertion_point(&arr, &target);
    if present {
        assert_eq!(arr[k], target);
    } else {
        assert_eq!(k, smaller, "absent target must insert after all smaller elements");
    }

    // Jump search: leftmost match, counted and plain agree
    let jump = jump_search(&arr, &target);
    assert_eq!(jump, present.then_some(smaller));
    let counted = jump_search_with_counter(&arr, &target);
    assert_eq!(counted.index, jump);
    assert!(counted.comparisons <= arr.len() + 1);
});

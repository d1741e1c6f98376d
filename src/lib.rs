// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Instrumented textbook search over in-memory slices.
//!
//! Six pure functions, generic over any `T: PartialOrd`: an all-indices
//! linear scan, a binary-search insertion point, and counted variants of
//! linear, binary and jump search that report how many comparisons they made.
//! A small harness ([`compare_algorithms`]) times the counted searches side by
//! side.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │  linear.rs  │   │  binary.rs  │   │   jump.rs   │
//! │ (all hits,  │   │ (insertion, │   │ (jump,      │
//! │  counted)   │   │  counted)   │   │  counted)   │
//! └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
//!        │                 │                 │
//!        ▼                 ▼                 ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  types.rs (Probe)          contracts.rs (debug)     │
//! └─────────────────────────────────────────────────────┘
//!        ▲
//!        │
//! ┌─────────────┐
//! │ compare.rs  │  timing harness, used by the `sift` CLI
//! └─────────────┘
//! ```
//!
//! # Preconditions
//!
//! | Function                         | Input must be sorted? | Result              |
//! |----------------------------------|-----------------------|---------------------|
//! | `find_all_indices`               | no                    | `Vec<usize>`        |
//! | `linear_search_with_counter`     | no                    | `Probe`             |
//! | `binary_search_insertion_point`  | ascending             | `usize` in `0..=n`  |
//! | `binary_search_with_counter`     | ascending             | `Probe`             |
//! | `jump_search`                    | ascending             | `Option<usize>`     |
//! | `jump_search_with_counter`       | ascending             | `Probe`             |
//!
//! Sortedness is never checked. Unsorted input gets an in-bounds answer that
//! may simply be wrong. No function panics, empty slices included.
//!
//! # Usage
//!
//! ```
//! use sift::{binary_search_with_counter, find_all_indices, jump_search};
//!
//! let arr = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
//! assert_eq!(find_all_indices(&arr, &5), vec![4, 8, 10]);
//!
//! let mut sorted = arr.to_vec();
//! sorted.sort();
//! assert_eq!(jump_search(&sorted, &6), Some(9));
//! assert_eq!(binary_search_with_counter(&sorted, &6).index, Some(9));
//! ```

// Module declarations
mod binary;
pub mod compare;
pub mod contracts;
mod jump;
mod linear;
pub mod testing;
mod types;

pub use binary::{binary_search_insertion_point, binary_search_with_counter};
pub use compare::{compare_algorithms, Algorithm, AlgorithmRun, Comparison};
pub use jump::{jump_search, jump_search_with_counter};
pub use linear::{find_all_indices, linear_search_with_counter};
pub use types::Probe;

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Side-by-side comparison of the counted searches.
//!
//! Runs linear search on the input as given, then binary and jump search on
//! a sorted copy, timing each call and keeping its [`Probe`]. Only the search
//! itself sits inside the timed region; sorting the copy does not.
//!
//! Indices from the linear run refer to the caller's slice. Indices from the
//! binary and jump runs refer to the sorted copy, so they can differ from the
//! linear one even when all three find the target.

use crate::binary::binary_search_with_counter;
use crate::jump::jump_search_with_counter;
use crate::linear::linear_search_with_counter;
use crate::types::Probe;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};

/// The three counted searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Linear,
    Binary,
    Jump,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Linear, Algorithm::Binary, Algorithm::Jump];

    /// Whether the algorithm needs ascending input.
    pub fn requires_sorted(self) -> bool {
        !matches!(self, Algorithm::Linear)
    }

    /// Run the counted variant of this algorithm.
    pub fn probe<T: PartialOrd>(self, arr: &[T], target: &T) -> Probe {
        match self {
            Algorithm::Linear => linear_search_with_counter(arr, target),
            Algorithm::Binary => binary_search_with_counter(arr, target),
            Algorithm::Jump => jump_search_with_counter(arr, target),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Linear => "Linear Search",
            Algorithm::Binary => "Binary Search",
            Algorithm::Jump => "Jump Search",
        };
        f.write_str(name)
    }
}

/// One timed search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub probe: Probe,
    #[serde(rename = "seconds", serialize_with = "serialize_seconds")]
    pub elapsed: Duration,
}

fn serialize_seconds<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Results of [`compare_algorithms`], one run per algorithm in
/// [`Algorithm::ALL`] order.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Whether the target occurs in the input at all.
    pub target_present: bool,
    pub runs: Vec<AlgorithmRun>,
}

impl Comparison {
    pub fn run(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|r| r.algorithm == algorithm)
    }

    /// All runs agree on found / not found.
    pub fn agree(&self) -> bool {
        self.runs
            .iter()
            .all(|r| r.probe.is_found() == self.target_present)
    }
}

/// Sort a copy ascending. Incomparable pairs (NaN) are treated as equal.
pub fn sorted_copy<T: PartialOrd + Clone>(arr: &[T]) -> Vec<T> {
    let mut sorted = arr.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

fn timed<T: PartialOrd>(algorithm: Algorithm, arr: &[T], target: &T) -> AlgorithmRun {
    let start = Instant::now();
    let probe = algorithm.probe(arr, target);
    let elapsed = start.elapsed();

    tracing::debug!(
        algorithm = %algorithm,
        index = probe.signed_index(),
        comparisons = probe.comparisons,
        elapsed_us = elapsed.as_micros() as u64,
        "search finished"
    );

    AlgorithmRun {
        algorithm,
        probe,
        elapsed,
    }
}

/// Time each counted search on `arr` (linear) and a sorted copy (binary, jump).
///
/// # Example
///
/// ```
/// use sift::{compare_algorithms, Algorithm};
///
/// let cmp = compare_algorithms(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5], &6);
/// assert!(cmp.agree());
/// assert_eq!(cmp.run(Algorithm::Linear).unwrap().probe.comparisons, 8);
/// ```
pub fn compare_algorithms<T: PartialOrd + Clone>(arr: &[T], target: &T) -> Comparison {
    let linear = timed(Algorithm::Linear, arr, target);

    let sorted = sorted_copy(arr);
    let binary = timed(Algorithm::Binary, &sorted, target);
    let jump = timed(Algorithm::Jump, &sorted, target);

    Comparison {
        target_present: linear.probe.is_found(),
        runs: vec![linear, binary, jump],
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result types shared by the counted searches.
//!
//! The plain searches answer with `Option<usize>` (or a `Vec<usize>` for the
//! all-indices scan). The instrumented ones also report how many element
//! comparisons they made, and that pair is a [`Probe`].
//!
//! # Invariants
//!
//! - **Probe**: `index.is_some() → seq[index] == target`. A found index always
//!   points at an element equal to the target.
//! - **Probe**: `comparisons` counts exactly the increments the algorithm
//!   performed. Off-by-one here is a behavior change, not a refactor.

use serde::Serialize;
use std::fmt;

/// Outcome of an instrumented search: where the target was found (if at all)
/// and how many comparisons it took to get there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Probe {
    /// Position of the match, `None` when the target is absent.
    pub index: Option<usize>,
    /// Element comparisons performed.
    pub comparisons: usize,
}

impl Probe {
    /// A successful probe.
    pub fn found(index: usize, comparisons: usize) -> Self {
        Self {
            index: Some(index),
            comparisons,
        }
    }

    /// An exhausted probe.
    pub fn missing(comparisons: usize) -> Self {
        Self {
            index: None,
            comparisons,
        }
    }

    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }

    /// Index in the classic `-1 when absent` convention.
    ///
    /// Only meant for display; code should match on [`Probe::index`].
    pub fn signed_index(&self) -> i64 {
        self.index.map_or(-1, |i| i as i64)
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.signed_index(), self.comparisons)
    }
}

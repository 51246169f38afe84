//! Pairing matrix: how many completed rounds have placed each pair of
//! participants in the same group.
//!
//! Each search worker owns one matrix exclusively for the duration of a
//! single session attempt; there are never concurrent writers.

use std::collections::BTreeMap;

/// Marker stored on the diagonal so "self" cells can never be mistaken for
/// a real repeat count. Excluded from all statistics.
pub const SELF_SENTINEL: u32 = u32::MAX;

/// Symmetric N×N table of pairing counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl PairMatrix {
    /// Create an all-zero matrix for `size` participants, with the diagonal
    /// set to [`SELF_SENTINEL`].
    pub fn new(size: usize) -> Self {
        let mut cells = vec![0; size * size];
        for i in 0..size {
            cells[i * size + i] = SELF_SENTINEL;
        }
        Self { size, cells }
    }

    /// Number of participants this matrix covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Record that `a` and `b` shared a group, incrementing both mirror
    /// cells so symmetry always holds.
    pub fn record_pair(&mut self, a: usize, b: usize) {
        debug_assert_ne!(a, b, "a participant cannot pair with itself");
        self.cells[a * self.size + b] += 1;
        self.cells[b * self.size + a] += 1;
    }

    /// How many times `a` and `b` have shared a group.
    pub fn count_between(&self, a: usize, b: usize) -> u32 {
        self.cells[a * self.size + b]
    }

    /// Map from repeat-count value to the number of unordered pairs holding
    /// that count. The diagonal is skipped, and pairs that never met are
    /// included under key 0, so the frequencies always sum to C(N, 2).
    pub fn distribution(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for a in 0..self.size {
            for b in (a + 1)..self.size {
                *counts.entry(self.count_between(a, b)).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Largest repeat count among unordered pairs, ignoring the diagonal.
    pub fn max_count(&self) -> u32 {
        self.distribution().keys().next_back().copied().unwrap_or(0)
    }

    /// Iterate over rows for diagnostic display.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.size)
    }
}

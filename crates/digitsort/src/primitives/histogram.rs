//! Digit frequency table for a single counting pass.
//!
//! ## Purpose
//!
//! A `CountTable` holds one counter per decimal digit. A counting pass
//! tallies digits, converts the tallies to inclusive prefix sums, and then
//! claims output slots from the back of each digit's range.
//!
//! ## Invariants
//!
//! * After `accumulate`, `get(d)` is the number of elements with digit `<= d`.
//! * Each `claim(d)` hands out a distinct slot; slots for digit `d` are
//!   handed out in descending order.

// Internal dependencies
use crate::primitives::digits::RADIX;

/// Fixed-size per-digit counters. Lives on the stack of one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountTable {
    counts: [usize; RADIX],
}

impl CountTable {
    /// Create a table with every counter at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `digit`.
    #[inline]
    pub fn tally(&mut self, digit: usize) {
        self.counts[digit] += 1;
    }

    /// Convert frequencies into inclusive prefix sums.
    pub fn accumulate(&mut self) {
        for i in 1..RADIX {
            self.counts[i] += self.counts[i - 1];
        }
    }

    /// Take the last free slot for `digit`: decrement its counter and return it.
    ///
    /// Only meaningful after [`accumulate`](Self::accumulate).
    #[inline]
    pub fn claim(&mut self, digit: usize) -> usize {
        self.counts[digit] -= 1;
        self.counts[digit]
    }

    /// Current counter for `digit`.
    #[inline]
    pub fn get(&self, digit: usize) -> usize {
        self.counts[digit]
    }
}

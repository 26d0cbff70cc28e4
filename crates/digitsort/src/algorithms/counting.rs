//! Digit counting pass for LSD radix sort.
//!
//! ## Purpose
//!
//! This module implements one pass of the radix sort: a counting sort that
//! orders a sequence by the decimal digit at a single place value.
//!
//! ## Design notes
//!
//! * **Stability**: The output is filled from the back while the input is
//!   walked from the back, so elements with equal digits keep their input
//!   order. Later passes rely on this for correctness.
//! * **Purity**: The input is borrowed; a fresh output is allocated per pass.
//! * **Keyed**: `counting_pass_by` sorts arbitrary `Copy` values by an integer
//!   key, which lets the float path carry the original values along.
//!
//! ## Key concepts
//!
//! 1. **Tally**: Compute each element's digit and count occurrences.
//! 2. **Accumulate**: Turn counts into inclusive prefix sums.
//! 3. **Scatter**: Walk the input backwards, placing each element at the last
//!    free slot of its digit's range.
//!
//! ## Invariants
//!
//! * Output length equals input length and holds the same multiset.
//! * Output is grouped by digit in ascending order.
//! * Elements with equal digits appear in input order.
//!
//! ## Non-goals
//!
//! * This module does not decide how many passes to run (see the executor).
//! * This module does not validate keys or place values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::digits::{digit_at, RADIX};
use crate::primitives::histogram::CountTable;

// ============================================================================
// Counting Pass
// ============================================================================

/// Stable sort of `input` by the decimal digit at `place`.
#[inline]
pub fn counting_pass<T: PrimInt>(input: &[T], place: T) -> Vec<T> {
    counting_pass_by(input, place, |&value| value)
}

/// Stable sort of `input` by the decimal digit at `place` of `key(element)`.
///
/// 1. Computes every element's digit once.
/// 2. Builds the per-digit frequency table and its prefix sums.
/// 3. Walks the input from the last index to the first, assigning each
///    element the last free slot for its digit.
/// 4. Gathers the elements into their slots.
pub fn counting_pass_by<V, K, F>(input: &[V], place: K, key: F) -> Vec<V>
where
    V: Copy,
    K: PrimInt,
    F: Fn(&V) -> K,
{
    let digits: Vec<usize> = input.iter().map(|v| digit_at(key(v), place)).collect();

    let mut counts = CountTable::new();
    for &digit in &digits {
        counts.tally(digit);
    }
    counts.accumulate();
    debug_assert_eq!(counts.get(RADIX - 1), input.len());

    // slots[output_pos] = input_pos
    let mut slots = vec![0usize; input.len()];
    for (i, &digit) in digits.iter().enumerate().rev() {
        slots[counts.claim(digit)] = i;
    }

    slots.into_iter().map(|i| input[i]).collect()
}

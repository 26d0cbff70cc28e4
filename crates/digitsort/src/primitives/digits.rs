//! Decimal digit arithmetic for radix sorting.
//!
//! ## Purpose
//!
//! This module extracts individual decimal digits from integer keys and
//! enumerates the place values (`1, 10, 100, ...`) a sort has to visit.
//!
//! ## Design notes
//!
//! * **Generic**: Works for every `PrimInt`, signed or unsigned.
//! * **Overflow-safe**: Place values are advanced with `checked_mul`, so the
//!   widest types (`u128::MAX`) never wrap.
//!
//! ## Invariants
//!
//! * `digit_at` returns a value in `0..RADIX` for non-negative keys.
//! * `PlaceValues::up_to(max)` yields one place value per decimal digit of `max`.
//!
//! ## Non-goals
//!
//! * Bases other than 10.
//! * Negative keys (rejected by the validator before any pass runs).

// External dependencies
use num_traits::PrimInt;

/// Number of distinct decimal digits, and so of count-table buckets.
pub const RADIX: usize = 10;

/// The decimal base as `T`.
///
/// Built from shifts so no fallible cast is needed; every primitive integer
/// type can hold 10.
#[inline]
pub fn base<T: PrimInt>() -> T {
    (T::one() << 3) + (T::one() << 1)
}

/// Decimal digit of `value` at `place`: `(value / place) % 10`.
///
/// `place` must be positive and `value` non-negative.
#[inline]
pub fn digit_at<T: PrimInt>(value: T, place: T) -> usize {
    debug_assert!(value >= T::zero(), "digit_at requires a non-negative key");
    debug_assert!(
        place > T::zero(),
        "digit_at requires a positive place value"
    );

    ((value / place) % base::<T>()).to_usize().unwrap_or(0)
}

/// Returns `true` if `place` is one of `1, 10, 100, ...`.
pub fn is_power_of_ten<T: PrimInt>(place: T) -> bool {
    if place <= T::zero() {
        return false;
    }

    let ten = base::<T>();
    let mut rest = place;
    while rest % ten == T::zero() {
        rest = rest / ten;
    }
    rest == T::one()
}

// ============================================================================
// Place Value Iterator
// ============================================================================

/// Iterator over the place values needed to sort keys no larger than `max`.
///
/// Yields `1, 10, 100, ...` while `max / place > 0`. Iteration also ends
/// when the next place value would overflow `T`.
#[derive(Debug, Clone)]
pub struct PlaceValues<T> {
    max: T,
    next: Option<T>,
}

impl<T: PrimInt> PlaceValues<T> {
    /// Place values for a sequence whose largest key is `max`.
    pub fn up_to(max: T) -> Self {
        Self {
            max,
            next: Some(T::one()),
        }
    }
}

impl<T: PrimInt> Iterator for PlaceValues<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let place = self.next?;
        if self.max / place <= T::zero() {
            self.next = None;
            return None;
        }

        self.next = place.checked_mul(&base::<T>());
        Some(place)
    }
}

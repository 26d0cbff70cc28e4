//! High-level API for radix sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: free functions for the
//! common cases and a fluent builder for runs that should also report how
//! the sort proceeded.
//!
//! ## Design notes
//!
//! * **Pure**: Every entry point borrows its input and returns a new `Vec`.
//! * **Type-directed**: Unsigned inputs cannot be invalid, so `radix_sort`
//!   is infallible; signed and float inputs go through `try_*` functions.
//! * **Validated**: Invalid values are rejected with `RadixError`, never
//!   sorted into a wrong order.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RadixSortBuilder`] via `RadixSort::new()`.
//! 2. Chain options (`.trace_passes()`, `.verify_output()`).
//! 3. Call `.build()` to get a [`RadixSorter`], then `.sort(&data)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use num_traits::{Float, PrimInt, Unsigned};

// Internal dependencies
use crate::algorithms::keys::float_keys;
use crate::engine::executor::{RadixConfig, RadixExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::RadixResult;
pub use crate::primitives::errors::RadixError;

// ============================================================================
// Free Functions
// ============================================================================

/// Sort unsigned integers in ascending order, returning a new `Vec`.
///
/// ```rust
/// use digitsort::prelude::*;
///
/// assert_eq!(radix_sort(&[10000_u32, 1, 999]), vec![1, 999, 10000]);
/// assert!(radix_sort::<u8>(&[]).is_empty());
/// ```
pub fn radix_sort<T: PrimInt + Unsigned>(input: &[T]) -> Vec<T> {
    RadixExecutor::new().run(input).sorted
}

/// Sort integers of any primitive type, rejecting negative values.
pub fn try_radix_sort<T: PrimInt>(input: &[T]) -> Result<Vec<T>, RadixError> {
    Validator::validate_non_negative(input)?;
    Ok(RadixExecutor::new().run(input).sorted)
}

/// Sort floats that hold non-negative integer values.
///
/// NaN, infinities, negative values, values with a fractional part, and
/// values beyond `u128::MAX` are rejected. The original values are returned,
/// reordered; `-0.0` keeps its sign and sorts with `0.0`.
pub fn try_radix_sort_float<F: Float>(input: &[F]) -> Result<Vec<F>, RadixError> {
    Validator::validate_float_values(input)?;
    let keyed = float_keys(input)?;

    let output = RadixExecutor::new().run_by_key(&keyed, |&(key, _)| key);
    Ok(output.sorted.into_iter().map(|(_, value)| value).collect())
}

/// Run one stable counting pass on the digit at `place`.
///
/// This is a single step of [`try_radix_sort`]: the output is grouped by
/// `(value / place) % 10`, with equal digits kept in input order. `place`
/// must be one of `1, 10, 100, ...`.
///
/// ```rust
/// use digitsort::prelude::*;
///
/// assert_eq!(digit_pass(&[170_u32, 45, 802, 2], 1)?, vec![170, 802, 2, 45]);
/// assert!(matches!(
///     digit_pass(&[1_u32], 20),
///     Err(RadixError::InvalidPlaceValue(_))
/// ));
/// # Result::<(), RadixError>::Ok(())
/// ```
pub fn digit_pass<T: PrimInt>(input: &[T], place: T) -> Result<Vec<T>, RadixError> {
    RadixExecutor::checked_pass(input, place)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a radix sort run.
#[derive(Debug, Clone)]
pub struct RadixSortBuilder<T> {
    /// Record the sequence after every pass.
    pub trace_passes: Option<bool>,

    /// Check that the output is non-decreasing.
    pub verify_output: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: PrimInt> Default for RadixSortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> RadixSortBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            trace_passes: None,
            verify_output: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Keep a snapshot of the sequence after every counting pass.
    pub fn trace_passes(mut self) -> Self {
        if self.trace_passes.is_some() {
            self.duplicate_param = Some("trace_passes");
        }
        self.trace_passes = Some(true);
        self
    }

    /// Check the output is non-decreasing and report it in the result.
    pub fn verify_output(mut self) -> Self {
        if self.verify_output.is_some() {
            self.duplicate_param = Some("verify_output");
        }
        self.verify_output = Some(true);
        self
    }

    /// Validate the configuration and build a sorter.
    pub fn build(self) -> Result<RadixSorter<T>, RadixError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(RadixError::DuplicateParameter { parameter });
        }

        Ok(RadixSorter {
            config: RadixConfig {
                trace_passes: self.trace_passes.unwrap_or(false),
            },
            verify_output: self.verify_output.unwrap_or(false),
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// A configured radix sort, reusable across inputs.
#[derive(Debug, Clone)]
pub struct RadixSorter<T> {
    config: RadixConfig,
    verify_output: bool,
    _marker: PhantomData<T>,
}

impl<T: PrimInt> RadixSorter<T> {
    /// Sort `input`, returning the sorted values and a record of the passes.
    pub fn sort(&self, input: &[T]) -> Result<RadixResult<T>, RadixError> {
        Validator::validate_non_negative(input)?;

        let output = RadixExecutor::from_config(&self.config).run(input);
        let sorted = self
            .verify_output
            .then(|| output.sorted.windows(2).all(|w| w[0] <= w[1]));

        Ok(RadixResult {
            passes: output.passes(),
            values: output.sorted,
            max_value: output.max_key,
            place_values: output.place_values,
            pass_trace: output.trace,
            sorted,
        })
    }
}

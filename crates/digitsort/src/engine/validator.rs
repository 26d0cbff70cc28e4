//! Input validation for radix sorting.
//!
//! ## Purpose
//!
//! Digit extraction via `(value / place) % 10` is only meaningful for
//! non-negative integers. This module rejects everything else before any
//! pass runs, instead of letting the sort produce a silently wrong order.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first offending element.
//! * **Cheap for unsigned**: Types whose minimum is zero skip the scan.
//! * **Ordered checks**: Floats are checked for finiteness, then sign, then
//!   integrality, so NaN is reported as non-finite rather than fractional.
//!
//! ## Invariants
//!
//! * Empty sequences always validate.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not coerce invalid values (no clamping or truncation).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::{Float, PrimInt};

// Internal dependencies
use crate::algorithms::keys::float_repr;
use crate::primitives::digits::is_power_of_ten;
use crate::primitives::errors::RadixError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for radix sort inputs.
///
/// All methods return `Result<(), RadixError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Integer Inputs
    // ========================================================================

    /// Validate that every integer is non-negative.
    pub fn validate_non_negative<T: PrimInt>(values: &[T]) -> Result<(), RadixError> {
        if T::min_value() >= T::zero() {
            return Ok(());
        }

        match values.iter().position(|&v| v < T::zero()) {
            Some(index) => Err(RadixError::NegativeValue {
                index,
                value: int_repr(values[index]),
            }),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Floating-Point Inputs
    // ========================================================================

    /// Validate that every float is a finite, non-negative integer.
    ///
    /// `-0.0` is accepted and sorts as zero.
    pub fn validate_float_values<F: Float>(values: &[F]) -> Result<(), RadixError> {
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(RadixError::NonFiniteValue {
                    index,
                    value: float_repr(value),
                });
            }
            if value < F::zero() {
                return Err(RadixError::NegativeValue {
                    index,
                    value: float_repr(value),
                });
            }
            if value.trunc() != value {
                return Err(RadixError::FractionalValue {
                    index,
                    value: float_repr(value),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Pass Parameters
    // ========================================================================

    /// Validate that `place` is one of `1, 10, 100, ...`.
    pub fn validate_place_value<T: PrimInt>(place: T) -> Result<(), RadixError> {
        if !is_power_of_ten(place) {
            return Err(RadixError::InvalidPlaceValue(int_repr(place)));
        }
        Ok(())
    }
}

/// Render an integer of any width for error messages.
fn int_repr<T: PrimInt>(value: T) -> String {
    match (value.to_i128(), value.to_u128()) {
        (Some(v), _) => format!("{v}"),
        (None, Some(v)) => format!("{v}"),
        (None, None) => String::from("?"),
    }
}

//! Integer sort keys for floating-point inputs.
//!
//! ## Purpose
//!
//! Radix passes extract digits with integer division, so floating-point
//! values are sorted by an exact `u128` key while the original values ride
//! along with it.
//!
//! ## Invariants
//!
//! * Keys are only built for values already checked to be finite,
//!   non-negative integers.
//! * The key of `v` equals `v` exactly; no rounding happens.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RadixError;

/// Key/value pairs for a validated float sequence, in input order.
pub fn float_keys<F: Float>(values: &[F]) -> Result<Vec<(u128, F)>, RadixError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| match value.to_u128() {
            Some(key) => Ok((key, value)),
            None => Err(RadixError::Unrepresentable {
                index,
                value: float_repr(value),
            }),
        })
        .collect()
}

/// Render a float for error messages.
pub fn float_repr<F: Float>(value: F) -> String {
    format!("{}", value.to_f64().unwrap_or(f64::NAN))
}

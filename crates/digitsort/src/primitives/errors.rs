//! Error types for radix sort operations.
//!
//! ## Purpose
//!
//! This module defines the conditions under which a sort request is refused:
//! inputs that are not non-negative integers, place values that are not
//! powers of ten, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Value errors carry the index of the first offending element.
//! * **Deferred**: Builder errors are recorded during configuration and raised by `build()`.
//! * **No-std**: Uses `alloc` for the formatted value strings.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Negative, fractional, non-finite, or oversized values.
//! 2. **Pass validation**: Place values outside `1, 10, 100, ...`.
//! 3. **Configuration**: Options set more than once.
//!
//! ## Invariants
//!
//! * Empty input is never an error.
//! * Offending values are rendered with their own type's formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Allocation failure is not represented here; it aborts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for radix sort operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// A value is below zero; digit extraction is only defined for non-negative keys.
    NegativeValue {
        /// Position of the first negative element.
        index: usize,
        /// The offending value, formatted.
        value: String,
    },

    /// A floating-point value has a fractional part.
    FractionalValue {
        /// Position of the first fractional element.
        index: usize,
        /// The offending value, formatted.
        value: String,
    },

    /// A floating-point value is NaN or infinite.
    NonFiniteValue {
        /// Position of the first non-finite element.
        index: usize,
        /// The offending value, formatted.
        value: String,
    },

    /// A floating-point value is a valid non-negative integer but does not fit
    /// the 128-bit unsigned working key.
    Unrepresentable {
        /// Position of the first oversized element.
        index: usize,
        /// The offending value, formatted.
        value: String,
    },

    /// Place value is not a positive power of ten.
    InvalidPlaceValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl RadixError {
    /// Index of the offending element, if the error refers to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::NegativeValue { index, .. }
            | Self::FractionalValue { index, .. }
            | Self::NonFiniteValue { index, .. }
            | Self::Unrepresentable { index, .. } => Some(*index),
            Self::InvalidPlaceValue(_) | Self::DuplicateParameter { .. } => None,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RadixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NegativeValue { index, value } => {
                write!(f, "Negative value at index {index}: {value} (must be >= 0)")
            }
            Self::FractionalValue { index, value } => {
                write!(
                    f,
                    "Fractional value at index {index}: {value} (must be an integer)"
                )
            }
            Self::NonFiniteValue { index, value } => {
                write!(f, "Non-finite value at index {index}: {value}")
            }
            Self::Unrepresentable { index, value } => {
                write!(
                    f,
                    "Value at index {index} is too large to sort: {value} (must fit in u128)"
                )
            }
            Self::InvalidPlaceValue(place) => {
                write!(
                    f,
                    "Invalid place value: {place} (must be a positive power of 10)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RadixError {}

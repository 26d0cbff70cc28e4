//! Radix driver: runs digit passes from the least significant place upward.
//!
//! ## Purpose
//!
//! This module owns the outer loop of the sort. It finds the largest key,
//! derives the place values it needs, and feeds the working sequence through
//! one counting pass per place value.
//!
//! ## Design notes
//!
//! * **Purity**: The caller's slice is copied once; every pass replaces the
//!   working sequence with a newly allocated one.
//! * **Termination**: Place values come from `PlaceValues`, which stops once
//!   `max / place == 0` or the next place value would overflow the key type.
//! * **Tracing**: When enabled, a snapshot of the working sequence is kept
//!   after every pass.
//!
//! ## Key concepts
//!
//! * **Pass count**: Equals the number of decimal digits of the largest key,
//!   and is zero when every key is zero.
//! * **Keyed runs**: `run_by_key` sorts values by an extracted integer key;
//!   `run` is the identity-key case.
//!
//! ## Invariants
//!
//! * Empty input returns immediately with no passes.
//! * The returned sequence is a permutation of the input in ascending key order.
//!
//! ## Non-goals
//!
//! * This module does not validate keys (see `Validator`).
//! * No parallel or in-place execution.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::counting::{counting_pass, counting_pass_by};
use crate::engine::validator::Validator;
use crate::primitives::digits::PlaceValues;
use crate::primitives::errors::RadixError;

// ============================================================================
// Output
// ============================================================================

/// Output from a radix sort run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<V, K> {
    /// Values in ascending key order.
    pub sorted: Vec<V>,

    /// Largest key in the input (`None` for empty input).
    pub max_key: Option<K>,

    /// Place value used by each pass, in execution order.
    pub place_values: Vec<K>,

    /// Working sequence after each pass (if tracing was enabled).
    pub trace: Option<Vec<Vec<V>>>,
}

impl<V, K> ExecutorOutput<V, K> {
    /// Number of counting passes that were executed.
    pub fn passes(&self) -> usize {
        self.place_values.len()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Execution options for the radix driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RadixConfig {
    /// Keep the working sequence after every pass.
    pub trace_passes: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Drives the sequence of counting passes.
#[derive(Debug, Clone, Default)]
pub struct RadixExecutor {
    trace_passes: bool,
}

impl RadixExecutor {
    /// Create an executor with tracing disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor from a configuration.
    pub fn from_config(config: &RadixConfig) -> Self {
        Self::new().trace_passes(config.trace_passes)
    }

    /// Enable or disable per-pass snapshots.
    pub fn trace_passes(mut self, enabled: bool) -> Self {
        self.trace_passes = enabled;
        self
    }

    /// Sort integer keys. Keys must be non-negative.
    pub fn run<T: PrimInt>(&self, input: &[T]) -> ExecutorOutput<T, T> {
        self.run_by_key(input, |&value| value)
    }

    /// Sort `input` by `key(element)`. Keys must be non-negative.
    pub fn run_by_key<V, K, F>(&self, input: &[V], key: F) -> ExecutorOutput<V, K>
    where
        V: Copy,
        K: PrimInt,
        F: Fn(&V) -> K,
    {
        let mut trace = self.trace_passes.then(Vec::new);

        let Some(max_key) = input.iter().map(&key).max() else {
            return ExecutorOutput {
                sorted: Vec::new(),
                max_key: None,
                place_values: Vec::new(),
                trace,
            };
        };

        let mut working = input.to_vec();
        let mut place_values = Vec::new();

        for place in PlaceValues::up_to(max_key) {
            working = counting_pass_by(&working, place, &key);
            place_values.push(place);

            if let Some(snapshots) = trace.as_mut() {
                snapshots.push(working.clone());
            }
        }

        ExecutorOutput {
            sorted: working,
            max_key: Some(max_key),
            place_values,
            trace,
        }
    }

    /// Run a single counting pass after validating its arguments.
    pub fn checked_pass<T: PrimInt>(input: &[T], place: T) -> Result<Vec<T>, RadixError> {
        Validator::validate_place_value(place)?;
        Validator::validate_non_negative(input)?;

        Ok(counting_pass(input, place))
    }
}

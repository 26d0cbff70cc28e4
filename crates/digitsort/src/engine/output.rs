//! Output types for radix sort operations.
//!
//! ## Purpose
//!
//! This module defines `RadixResult`, which carries the sorted sequence
//! together with what the sort did to produce it: the largest key, the
//! place value of every pass, and optionally the sequence after each pass.
//!
//! ## Design notes
//!
//! * **Optional Outputs**: Trace and verification are only populated when requested.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `passes == place_values.len()`.
//! * When present, `pass_trace` has one entry per pass and its last entry equals `values`.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Result Structure
// ============================================================================

/// Sorted output plus a record of the passes that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RadixResult<T> {
    /// The sorted sequence.
    pub values: Vec<T>,

    /// Largest input value (`None` for empty input).
    pub max_value: Option<T>,

    /// Number of counting passes executed.
    pub passes: usize,

    /// Place value used by each pass, in execution order.
    pub place_values: Vec<T>,

    /// Sequence after each pass (when tracing was requested).
    pub pass_trace: Option<Vec<Vec<T>>>,

    /// Outcome of the non-decreasing check (when verification was requested).
    pub sorted: Option<bool>,
}

impl<T> RadixResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of values in the result.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the result holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if a pass trace was recorded.
    pub fn has_trace(&self) -> bool {
        self.pass_trace.is_some()
    }

    /// Verification outcome, if verification was requested.
    pub fn is_sorted(&self) -> Option<bool> {
        self.sorted
    }

    /// Consume the result, keeping only the sorted values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for RadixResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.values.len())?;
        match &self.max_value {
            Some(max) => writeln!(f, "  Max value:   {max}")?,
            None => writeln!(f, "  Max value:   -")?,
        }
        writeln!(f, "  Passes:      {}", self.passes)?;
        if let Some(sorted) = self.sorted {
            let verdict = if sorted { "sorted" } else { "NOT sorted" };
            writeln!(f, "  Verified:    {verdict}")?;
        }

        if let Some(trace) = &self.pass_trace {
            writeln!(f)?;
            writeln!(f, "Pass Trace:")?;
            for (place, snapshot) in self.place_values.iter().zip(trace) {
                write!(f, "  place {:<6}", place)?;
                write_list(f, snapshot)?;
                writeln!(f)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Sorted Data:")?;
        write!(f, "  ")?;
        write_list(f, &self.values)?;
        writeln!(f)
    }
}

/// Write `[a, b, c]` using each element's `Display`.
fn write_list<T: Display>(f: &mut Formatter<'_>, values: &[T]) -> Result {
    write!(f, "[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value}")?;
    }
    write!(f, "]")
}

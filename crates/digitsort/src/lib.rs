//! # digitsort — Stable Decimal Radix Sort for Rust
//!
//! A least-significant-digit radix sort for non-negative integers, built from
//! repeated stable counting-sort passes over decimal digit positions. The
//! caller's input is never modified: every entry point borrows a slice and
//! returns a freshly allocated, sorted `Vec`.
//!
//! ## How it works
//!
//! Each pass groups the sequence by one decimal digit (`(value / place) % 10`),
//! starting at the ones place. Because every pass is stable, ties on the
//! current digit keep the order established by the previous passes, so after
//! the pass for the most significant digit of the largest element the whole
//! sequence is in ascending order.
//!
//! ```text
//! [170, 45, 75, 90, 802, 24, 2, 66]
//!   place 1   -> [170, 90, 802, 2, 24, 45, 75, 66]
//!   place 10  -> [802, 2, 24, 45, 66, 170, 75, 90]
//!   place 100 -> [2, 24, 45, 66, 75, 90, 170, 802]
//! ```
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use digitsort::prelude::*;
//!
//! let data: Vec<u32> = vec![170, 45, 75, 90, 802, 24, 2, 66];
//! let sorted = radix_sort(&data);
//!
//! assert_eq!(sorted, vec![2, 24, 45, 66, 75, 90, 170, 802]);
//! assert_eq!(data[0], 170); // input untouched
//! ```
//!
//! ### Signed and Floating-Point Inputs
//!
//! Signed integers and floats are accepted as long as every value is a
//! non-negative integer. Anything else is rejected with a [`RadixError`]
//! naming the first offending index:
//!
//! ```rust
//! use digitsort::prelude::*;
//!
//! let ok = try_radix_sort(&[3_i64, 3, 2, 1, 2])?;
//! assert_eq!(ok, vec![1, 2, 2, 3, 3]);
//!
//! let err = try_radix_sort(&[4_i32, -7, 1]).unwrap_err();
//! assert!(matches!(err, RadixError::NegativeValue { index: 1, .. }));
//!
//! let floats = try_radix_sort_float(&[10000.0_f64, 1.0, 999.0])?;
//! assert_eq!(floats, vec![1.0, 999.0, 10000.0]);
//! # Result::<(), RadixError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! The builder records the place value and intermediate sequence of every
//! pass, which is useful for teaching and for debugging key extraction:
//!
//! ```rust
//! use digitsort::prelude::*;
//!
//! let sorter = RadixSort::new()
//!     .trace_passes()     // keep the sequence after every pass
//!     .verify_output()    // check the output is non-decreasing
//!     .build()?;
//!
//! let result = sorter.sort(&[170_u32, 45, 75, 90, 802, 24, 2, 66])?;
//!
//! assert_eq!(result.passes, 3);
//! assert_eq!(result.place_values, vec![1, 10, 100]);
//! assert_eq!(result.is_sorted(), Some(true));
//! println!("{}", result);
//! # Result::<(), RadixError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Data points: 8
//!   Max value:   802
//!   Passes:      3
//!   Verified:    sorted
//!
//! Pass Trace:
//!   place 1     [170, 90, 802, 2, 24, 45, 75, 66]
//!   place 10    [802, 2, 24, 45, 66, 170, 75, 90]
//!   place 100   [2, 24, 45, 66, 75, 90, 170, 802]
//!
//! Sorted Data:
//!   [2, 24, 45, 66, 75, 90, 170, 802]
//! ```
//!
//! ## Complexity
//!
//! `O(d * n)` time where `d` is the number of decimal digits of the largest
//! element, and `O(n)` auxiliary memory: each pass allocates one output
//! sequence and a 10-entry count table.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to drop the standard library dependency; only
//! `alloc` is required:
//!
//! ```toml
//! [dependencies]
//! digitsort = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, digit arithmetic, count tables.
mod primitives;

// Layer 2: Algorithms - the stable counting pass and key extraction.
mod algorithms;

// Layer 3: Engine - validation, pass orchestration, results.
mod engine;

// High-level API: free functions and the fluent builder.
mod api;

pub use api::RadixError;

// Standard digitsort prelude.
pub mod prelude {
    pub use crate::api::{
        digit_pass, radix_sort, try_radix_sort, try_radix_sort_float, RadixError, RadixResult,
        RadixSortBuilder as RadixSort, RadixSorter,
    };
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the stable digit counting pass that every radix sort
//! iteration runs, and the conversion of floating-point inputs into integer
//! sort keys.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stable counting sort on one decimal digit.
pub mod counting;

/// Integer keys for floating-point inputs.
pub mod keys;

//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type, decimal digit arithmetic, and the
//! fixed-size count table used by every counting pass. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Decimal digit extraction and place values.
pub mod digits;

/// Per-pass digit frequency table.
pub mod histogram;

/// Shared error types.
pub mod errors;

//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer drives the sort: it validates inputs, decides how many digit
//! passes are needed from the largest key, runs them in order of increasing
//! place value, and packages the outcome.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pass orchestration (the radix driver).
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sort operations.
pub mod output;

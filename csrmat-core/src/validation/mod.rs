//! Validation utilities for triplet sequences
//!
//! Pure functions on index slices with no I/O dependencies.

pub mod order;

pub use order::validate_strict_order;

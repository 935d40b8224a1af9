//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements.

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared for equality
/// - Sized: Have a known size at compile time
pub trait MatrixElement: Copy + PartialEq + Sized {
    /// Convert from f64 for generic construction
    ///
    /// This is used for generic matrix construction where the exact
    /// element type may not be known at compile time.
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

// Implement MatrixElement for standard numeric types

impl MatrixElement for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for i64 {
    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for u32 {
    fn from_f64(value: f64) -> Self {
        value as u32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for u64 {
    fn from_f64(value: f64) -> Self {
        value as u64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

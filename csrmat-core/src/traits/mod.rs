//! Abstract interfaces for append-once sparse matrices
//!
//! Traits are pure interfaces - no concrete implementations live here.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;

#![no_std]

//! CSRMAT Core - Append-Once Sparse Matrix Definitions
//!
//! This crate provides the core traits, error types, and validation
//! routines for append-once compressed sparse row matrices. It contains
//! pure definitions only - no allocation beyond what the `alloc` feature
//! gates, and no I/O.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod validation;

pub use error::{CsrError, Result};
pub use traits::{MatrixElement, SparseMatrix};
#[cfg(feature = "alloc")]
pub use traits::MatrixOperations;
pub use validation::validate_strict_order;

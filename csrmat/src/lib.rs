//! CSRMAT - Append-once compressed sparse row matrices
//!
//! This library provides a sparse matrix container for the build-once,
//! query-forever pattern: entries are appended in (mostly) row-major
//! order, the matrix is compressed exactly once into row-pointer form,
//! and afterwards only equal-position reads and in-place writes occur.
//!
//! ## Architecture
//!
//! CSRMAT follows a clean specification/implementation separation:
//!
//! - **csrmat-core**: Pure traits, error types, and validation (no_std, no I/O)
//! - **csrmat**: The concrete three-phase container
//!
//! ## Quick Start
//!
//! ```rust
//! use csrmat::CsrMatrix;
//!
//! let mut m = CsrMatrix::new();
//! m.append(0, 0, 1.5)?;
//! m.append(0, 7, 2.5)?;
//! m.append(4, 3, 3.5)?;
//! m.compress()?;
//!
//! assert_eq!(m.get(0, 7), 2.5);
//! m.set(4, 3, -3.5);
//! assert_eq!(m.get(4, 3), -3.5);
//! # Ok::<(), csrmat::CsrError>(())
//! ```
//!
//! ## Contract
//!
//! Only coordinates appended during the build phase may ever be passed to
//! [`CsrMatrix::get`] or [`CsrMatrix::set`]; looking up any other
//! coordinate panics. This is deliberate - a miss is a caller bug, not a
//! runtime condition. Use [`SparseMatrix::get_element`] when a
//! non-panicking probe is needed.
//!
//! The container is single-threaded: share it across threads only behind
//! external synchronization, since [`CsrMatrix::set`] mutates the shared
//! value storage.

// Re-export core abstractions
pub use csrmat_core::{
    // Core traits
    MatrixElement, MatrixOperations, SparseMatrix,
    // Error handling
    CsrError, Result,
    // Validation utilities
    validate_strict_order,
};

// Implementation modules
mod compress;
mod iter;
mod matrix;

// Public exports
pub use iter::Entries;
pub use matrix::CsrMatrix;

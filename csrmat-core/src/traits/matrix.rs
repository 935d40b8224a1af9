//! Core matrix abstraction traits
//!
//! This module defines the fundamental traits that all matrix
//! implementations must satisfy. These are pure interfaces with no
//! concrete implementations.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core sparse matrix trait for format-agnostic access
///
/// This trait provides the minimal interface that all sparse matrix
/// implementations must provide, regardless of storage layout.
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if no entry is stored at the position or if the
    /// position is out of bounds. Implementations must not panic here;
    /// this is the probing counterpart to any stricter accessors the
    /// implementation offers.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all stored entries in a row
    ///
    /// Elements are returned in column order.
    fn get_row(&self, row_index: usize) -> Vec<Self::Element>;

    /// Get all stored entries in a column
    ///
    /// Elements are returned in row order.
    fn get_col(&self, col_index: usize) -> Vec<Self::Element>;
}

//! Triplet to row-pointer compaction
//!
//! Folds the per-entry row indices into a row-pointer array of length
//! `nrows + 1`, after a single validation pass over the triplet order.

use csrmat_core::{validate_strict_order, MatrixElement, Result};

use crate::matrix::{CsrMatrix, Storage};

/// Unresolved row-pointer slot during construction.
const UNRESOLVED: usize = usize::MAX;

impl<T: MatrixElement> CsrMatrix<T> {
    /// Freeze the matrix into compressed row form.
    ///
    /// Validates that the triplet sequence is strictly ascending by
    /// (row, col), then replaces the per-entry row indices with the
    /// row-pointer array. The transition is irreversible: afterwards only
    /// [`get`](Self::get) and [`set`](Self::set) are legal and further
    /// appends fail. Calling this on an already compressed matrix is a
    /// no-op returning success.
    ///
    /// An empty matrix compresses to zero rows.
    ///
    /// # Errors
    ///
    /// Returns [`CsrError::UnsortedOrDuplicate`](csrmat_core::CsrError::UnsortedOrDuplicate)
    /// naming the first offending adjacent pair if the order check fails;
    /// the matrix is unchanged and stays in the triplet phase. There is
    /// no way to remove a bad entry, so recovery in practice means
    /// rebuilding from scratch.
    pub fn compress(&mut self) -> Result<()> {
        let rows = match &self.storage {
            Storage::Triplet { rows } => rows,
            Storage::Compressed { .. } => return Ok(()),
        };
        validate_strict_order(rows, &self.cols)?;

        let row_ptr = build_row_ptr(rows);
        self.storage = Storage::Compressed { row_ptr };
        Ok(())
    }
}

/// Build the row-pointer array from a strictly ascending row-index slice.
///
/// One forward walk records the first entry position of every non-empty
/// row; a backward walk then propagates the nearest resolved pointer into
/// the slots of empty rows, so an empty row `i` reports the zero-length
/// range `[row_ptr[i], row_ptr[i])` at the start of the next non-empty
/// row (or at the total entry count).
fn build_row_ptr(rows: &[usize]) -> Vec<usize> {
    let nrows = rows.last().map_or(0, |&last| last + 1);
    let mut row_ptr = vec![UNRESOLVED; nrows + 1];

    let mut cursor = 0;
    for (i, slot) in row_ptr.iter_mut().enumerate().take(nrows) {
        // The last triplet has row nrows - 1, so the cursor cannot run
        // past the end before finding a row >= i.
        while rows[cursor] < i {
            cursor += 1;
        }
        if rows[cursor] == i {
            *slot = cursor;
        }
    }
    row_ptr[nrows] = rows.len();

    let mut next = rows.len();
    for slot in row_ptr.iter_mut().take(nrows).rev() {
        if *slot == UNRESOLVED {
            *slot = next;
        } else {
            next = *slot;
        }
    }
    row_ptr
}

//! Iteration over compressed matrices

use csrmat_core::{MatrixElement, MatrixOperations};

use crate::matrix::{CsrMatrix, Storage};

impl<T: MatrixElement> CsrMatrix<T> {
    /// Iterate over the stored entries of one row as `(col, value)`
    /// pairs, in ascending column order.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not compressed or `row` is out of bounds,
    /// like [`get`](Self::get).
    pub fn row_view(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let (start, end) = self.row_range(row);
        self.cols[start..end]
            .iter()
            .copied()
            .zip(self.values[start..end].iter().copied())
    }

    /// Iterate over all stored entries as `(row, col, value)` triples in
    /// row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not compressed.
    pub fn iter(&self) -> Entries<'_, T> {
        let row_ptr = match &self.storage {
            Storage::Compressed { row_ptr } => row_ptr,
            Storage::Triplet { .. } => panic!("iter() before compress()"),
        };
        Entries {
            matrix: self,
            row_ptr,
            row: 0,
            pos: 0,
        }
    }
}

/// Row-major iterator over all stored entries of a compressed matrix.
pub struct Entries<'a, T> {
    matrix: &'a CsrMatrix<T>,
    row_ptr: &'a [usize],
    row: usize,
    pos: usize,
}

impl<T: MatrixElement> Iterator for Entries<'_, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.matrix.values.len() {
            return None;
        }
        // Skip row boundaries (including empty rows) until the current
        // position falls inside the current row's range.
        while self.pos >= self.row_ptr[self.row + 1] {
            self.row += 1;
        }
        let item = (self.row, self.matrix.cols[self.pos], self.matrix.values[self.pos]);
        self.pos += 1;
        Some(item)
    }
}

impl<T: MatrixElement> MatrixOperations for CsrMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<T> {
        match &self.storage {
            Storage::Compressed { row_ptr } => {
                if row_index + 1 >= row_ptr.len() {
                    return Vec::new();
                }
                self.values[row_ptr[row_index]..row_ptr[row_index + 1]].to_vec()
            }
            Storage::Triplet { rows } => rows
                .iter()
                .zip(&self.values)
                .filter(|&(&r, _)| r == row_index)
                .map(|(_, &v)| v)
                .collect(),
        }
    }

    fn get_col(&self, col_index: usize) -> Vec<T> {
        // Entries are in row-major order in both phases, so a filter
        // over the column indices yields row order.
        self.cols
            .iter()
            .zip(&self.values)
            .filter(|&(&c, _)| c == col_index)
            .map(|(_, &v)| v)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CsrMatrix<f64> {
        let mut m = CsrMatrix::new();
        m.append(0, 0, 0.0).unwrap();
        m.append(0, 3, 0.3).unwrap();
        m.append(2, 5, 2.5).unwrap();
        m.append(2, 7, 2.7).unwrap();
        m.append(3, 1, 3.1).unwrap();
        m
    }

    #[test]
    fn test_row_view_yields_column_order() {
        let mut m = sample();
        m.compress().unwrap();
        let row: Vec<_> = m.row_view(2).collect();
        assert_eq!(row, vec![(5, 2.5), (7, 2.7)]);
        assert_eq!(m.row_view(1).count(), 0);
    }

    #[test]
    fn test_iter_walks_entries_row_major() {
        let mut m = sample();
        m.compress().unwrap();
        let entries: Vec<_> = m.iter().collect();
        assert_eq!(
            entries,
            vec![
                (0, 0, 0.0),
                (0, 3, 0.3),
                (2, 5, 2.5),
                (2, 7, 2.7),
                (3, 1, 3.1),
            ]
        );
    }

    #[test]
    fn test_get_row_and_col_in_both_phases() {
        let mut m = sample();
        assert_eq!(m.get_row(2), vec![2.5, 2.7]);
        assert_eq!(m.get_col(1), vec![3.1]);
        m.compress().unwrap();
        assert_eq!(m.get_row(2), vec![2.5, 2.7]);
        assert_eq!(m.get_row(1), Vec::<f64>::new());
        assert_eq!(m.get_row(99), Vec::<f64>::new());
        assert_eq!(m.get_col(1), vec![3.1]);
    }

    #[test]
    #[should_panic(expected = "before compress()")]
    fn test_iter_before_compress_panics() {
        sample().iter().count();
    }
}

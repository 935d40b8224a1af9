//! Append-once CSR matrix container
//!
//! The container moves through two phases separated by a one-way
//! transition: a triplet phase where entries are accumulated in strictly
//! ascending (row, col) order, and a compressed phase where the row
//! indices have been folded into a row-pointer array and only point
//! reads and in-place writes are permitted.

use core::cmp::Ordering;

use csrmat_core::{CsrError, MatrixElement, Result, SparseMatrix};

/// Entry index storage, tagged by lifecycle phase.
///
/// `Triplet` holds one row index per stored entry, parallel to the
/// column/value vectors. `Compressed` holds the row-pointer array of
/// length `nrows + 1`; row `i` owns the half-open range
/// `[row_ptr[i], row_ptr[i + 1])` of the column/value vectors.
#[derive(Debug, Clone)]
pub(crate) enum Storage {
    Triplet { rows: Vec<usize> },
    Compressed { row_ptr: Vec<usize> },
}

/// Sparse matrix built by appending entries, then frozen into CSR form.
///
/// Intended for matrices with far more rows than columns, built once in
/// (mostly) row-major order and afterwards accessed only at coordinates
/// that were declared during the build. The lifecycle is append, then
/// [`compress`](Self::compress), then [`get`](Self::get)/[`set`](Self::set)
/// only; compression is irreversible and the coordinate set can never
/// change after it.
#[derive(Debug, Clone)]
pub struct CsrMatrix<T> {
    pub(crate) values: Vec<T>,
    pub(crate) cols: Vec<usize>,
    pub(crate) storage: Storage,
    /// Highest column index observed plus one.
    ncols: usize,
}

impl<T: MatrixElement> CsrMatrix<T> {
    /// Create an empty matrix in the triplet (builder) phase.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            cols: Vec::new(),
            storage: Storage::Triplet { rows: Vec::new() },
            ncols: 0,
        }
    }

    /// Create an empty matrix with room for `nnz` entries.
    pub fn with_capacity(nnz: usize) -> Self {
        Self {
            values: Vec::with_capacity(nnz),
            cols: Vec::with_capacity(nnz),
            storage: Storage::Triplet {
                rows: Vec::with_capacity(nnz),
            },
            ncols: 0,
        }
    }

    /// Build a matrix from `(row, col, value)` triplets with f64 values.
    ///
    /// Generic construction for callers that produce values as f64
    /// regardless of the stored element type; each value goes through
    /// [`MatrixElement::from_f64`]. Entries may arrive in any order; the
    /// matrix is left in the triplet phase so the caller decides when to
    /// [`compress`](Self::compress).
    pub fn from_triplets(entries: &[(usize, usize, f64)]) -> Result<Self> {
        let mut matrix = Self::with_capacity(entries.len());
        for &(row, col, value) in entries {
            matrix.append(row, col, T::from_f64(value))?;
        }
        Ok(matrix)
    }

    /// Append the entry `(row, col, value)`, keeping the triplet sequence
    /// strictly ascending by (row, col).
    ///
    /// Appending in ascending coordinate order is O(1); an entry that
    /// belongs before the current tail is spliced in by scanning back to
    /// its row and shifting the tail one slot, which is O(nnz) and meant
    /// only to absorb occasional out-of-order input.
    ///
    /// Duplicate coordinates are not detected here. A duplicate produces
    /// two adjacent equal coordinates and is reported by
    /// [`compress`](Self::compress), not by this method.
    ///
    /// # Errors
    ///
    /// Returns [`CsrError::AlreadyCompressed`] once [`compress`](Self::compress)
    /// has succeeded; the matrix is left untouched.
    pub fn append(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let rows = match &mut self.storage {
            Storage::Triplet { rows } => rows,
            Storage::Compressed { .. } => return Err(CsrError::AlreadyCompressed),
        };
        self.ncols = self.ncols.max(col + 1);

        // Fast path: strictly beyond the current tail coordinate.
        let tail_in_order = match rows.last() {
            None => true,
            Some(&last_row) => (last_row, self.cols[self.cols.len() - 1]) < (row, col),
        };
        if tail_in_order {
            rows.push(row);
            self.cols.push(col);
            self.values.push(value);
            return Ok(());
        }

        // General path: walk back past every entry of rows >= row, then
        // forward over this row's smaller columns. The slot found is the
        // first position whose coordinate is >= (row, col).
        let mut k = rows.len();
        while k > 0 && rows[k - 1] >= row {
            k -= 1;
        }
        while k < rows.len() && rows[k] == row && self.cols[k] < col {
            k += 1;
        }
        rows.insert(k, row);
        self.cols.insert(k, col);
        self.values.insert(k, value);
        Ok(())
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Number of rows: the highest appended row index plus one.
    pub fn nrows(&self) -> usize {
        match &self.storage {
            Storage::Triplet { rows } => rows.last().map_or(0, |&r| r + 1),
            Storage::Compressed { row_ptr } => row_ptr.len() - 1,
        }
    }

    /// Number of columns: the highest appended column index plus one.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix has been compressed.
    pub fn is_compressed(&self) -> bool {
        matches!(self.storage, Storage::Compressed { .. })
    }

    /// Half-open entry range `[start, end)` owned by `row`.
    ///
    /// An empty row reports `start == end`.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not compressed or `row` is out of bounds.
    pub fn row_range(&self, row: usize) -> (usize, usize) {
        let row_ptr = match &self.storage {
            Storage::Compressed { row_ptr } => row_ptr,
            Storage::Triplet { .. } => panic!("row_range({row}, _) before compress()"),
        };
        assert!(row + 1 < row_ptr.len(), "row {row} out of bounds");
        (row_ptr[row], row_ptr[row + 1])
    }

    /// Resolve a coordinate to its entry position by binary search over
    /// the row's column range. Only reachable after compression; only
    /// coordinates appended during the build resolve.
    fn index(&self, row: usize, col: usize) -> usize {
        let (mut lo, mut hi) = self.row_range(row);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.cols[mid].cmp(&col) {
                Ordering::Equal => return mid,
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
        }
        let (start, end) = self.row_range(row);
        panic!("no entry at ({row},{col}), row range {start}..{end}")
    }

    /// Read the value stored at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not compressed or if no entry was appended
    /// at this coordinate. Querying an undeclared coordinate is a
    /// contract violation, not a recoverable condition; use
    /// [`SparseMatrix::get_element`] to probe.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.values[self.index(row, col)]
    }

    /// Overwrite the value stored at `(row, col)` in place.
    ///
    /// The coordinate set is frozen at compression; only values of
    /// existing entries can change.
    ///
    /// # Panics
    ///
    /// Same contract as [`get`](Self::get).
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let k = self.index(row, col);
        self.values[k] = value;
    }
}

impl<T: MatrixElement> Default for CsrMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MatrixElement> SparseMatrix for CsrMatrix<T> {
    type Element = T;

    /// Probe for an entry without the panicking contract of
    /// [`CsrMatrix::get`]. Works in both phases: the triplet sequence is
    /// already sorted by (row, col), so both layouts binary-search.
    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        match &self.storage {
            Storage::Compressed { row_ptr } => {
                if row + 1 >= row_ptr.len() {
                    return None;
                }
                let (mut lo, mut hi) = (row_ptr[row], row_ptr[row + 1]);
                while lo < hi {
                    let mid = lo + (hi - lo) / 2;
                    match self.cols[mid].cmp(&col) {
                        Ordering::Equal => return Some(self.values[mid]),
                        Ordering::Less => lo = mid + 1,
                        Ordering::Greater => hi = mid,
                    }
                }
                None
            }
            Storage::Triplet { rows } => {
                let (mut lo, mut hi) = (0, rows.len());
                while lo < hi {
                    let mid = lo + (hi - lo) / 2;
                    match (rows[mid], self.cols[mid]).cmp(&(row, col)) {
                        Ordering::Equal => return Some(self.values[mid]),
                        Ordering::Less => lo = mid + 1,
                        Ordering::Greater => hi = mid,
                    }
                }
                None
            }
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_path_appends_to_tail() {
        let mut m = CsrMatrix::new();
        m.append(0, 0, 1.0).unwrap();
        m.append(0, 2, 2.0).unwrap();
        m.append(3, 1, 3.0).unwrap();
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.dimensions(), (4, 3));
        assert!(!m.is_compressed());
    }

    #[test]
    fn test_general_path_splices_into_earlier_row() {
        let mut m = CsrMatrix::new();
        m.append(0, 3, 0.3).unwrap();
        m.append(2, 6, 2.6).unwrap();
        m.append(2, 5, 2.5).unwrap();
        m.append(0, 1, 0.1).unwrap();
        // Triplet order must be strictly ascending after the splices.
        assert_eq!(m.cols, vec![1, 3, 5, 6]);
        assert_eq!(m.get_element(0, 1), Some(0.1));
        assert_eq!(m.get_element(2, 5), Some(2.5));
        m.compress().unwrap();
        assert_eq!(m.get(0, 1), 0.1);
        assert_eq!(m.get(2, 6), 2.6);
    }

    #[test]
    fn test_append_after_compress_rejected() {
        let mut m = CsrMatrix::new();
        m.append(1, 2, 9.0).unwrap();
        m.compress().unwrap();
        assert_eq!(m.append(1, 3, 1.0), Err(CsrError::AlreadyCompressed));
        // Compressed data unchanged.
        assert_eq!(m.nnz(), 1);
        assert_eq!(m.get(1, 2), 9.0);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut m = CsrMatrix::new();
        m.append(0, 0, 1.0).unwrap();
        m.append(0, 4, 2.0).unwrap();
        m.compress().unwrap();
        m.set(0, 4, -2.0);
        assert_eq!(m.get(0, 4), -2.0);
        assert_eq!(m.get(0, 0), 1.0);
    }

    #[test]
    fn test_get_element_probes_both_phases() {
        let mut m = CsrMatrix::new();
        m.append(1, 1, 1.1).unwrap();
        m.append(1, 3, 1.3).unwrap();
        assert_eq!(m.get_element(1, 3), Some(1.3));
        assert_eq!(m.get_element(1, 2), None);
        assert_eq!(m.get_element(9, 0), None);
        m.compress().unwrap();
        assert_eq!(m.get_element(1, 3), Some(1.3));
        assert_eq!(m.get_element(1, 2), None);
        assert_eq!(m.get_element(9, 0), None);
    }

    #[test]
    #[should_panic(expected = "no entry at")]
    fn test_get_missing_coordinate_panics() {
        let mut m = CsrMatrix::new();
        m.append(0, 1, 1.0).unwrap();
        m.compress().unwrap();
        m.get(0, 2);
    }

    #[test]
    #[should_panic(expected = "before compress()")]
    fn test_get_before_compress_panics() {
        let mut m = CsrMatrix::new();
        m.append(0, 1, 1.0).unwrap();
        m.get(0, 1);
    }

    #[test]
    fn test_out_of_order_build_scenario() {
        let entries = [
            (0, 0, 0.0),
            (0, 3, 0.3),
            (0, 4, 0.4),
            (2, 6, 2.6),
            (2, 5, 2.5),
            (2, 7, 2.7),
            (3, 6, 3.6),
            (3, 7, 3.7),
            (3, 1, 3.1),
        ];
        let mut m = CsrMatrix::with_capacity(entries.len());
        for &(row, col, value) in &entries {
            m.append(row, col, value).unwrap();
        }
        m.compress().unwrap();

        for &(row, col, value) in &entries {
            assert_eq!(m.get(row, col), value, "get({row},{col})");
        }
        assert_eq!(m.get(3, 1), 3.1);
        assert_eq!(m.get(2, 5), 2.5);
        // Row 1 was never touched and must report an empty range.
        let (start, end) = m.row_range(1);
        assert_eq!(start, end);

        m.set(0, 3, -0.3);
        m.set(2, 6, -2.6);
        assert_eq!(m.get(0, 3), -0.3);
        assert_eq!(m.get(2, 6), -2.6);
        for &(row, col, value) in &entries {
            if (row, col) != (0, 3) && (row, col) != (2, 6) {
                assert_eq!(m.get(row, col), value, "get({row},{col}) after set");
            }
        }
    }

    #[test]
    fn test_shuffled_round_trip() {
        use rand::rngs::StdRng;
        use rand::seq::SliceRandom;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        // Unique coordinates: tall matrix, a sprinkling of columns per row.
        let mut entries: Vec<(usize, usize, f64)> = (0..400)
            .flat_map(|row| {
                [(row * 31) % 13, ((row * 31) % 13 + 5) % 17 + 13]
                    .into_iter()
                    .map(move |col| (row, col, (row * 100 + col) as f64))
            })
            .collect();
        entries.shuffle(&mut rng);

        let mut m = CsrMatrix::with_capacity(entries.len());
        for &(row, col, value) in &entries {
            m.append(row, col, value).unwrap();
        }
        m.compress().unwrap();

        assert_eq!(m.nnz(), entries.len());
        for &(row, col, value) in &entries {
            assert_eq!(m.get(row, col), value, "get({row},{col})");
        }
    }

    #[test]
    fn test_integer_elements() {
        let mut m: CsrMatrix<i64> = CsrMatrix::with_capacity(2);
        m.append(0, 0, -7).unwrap();
        m.append(5, 3, 11).unwrap();
        m.compress().unwrap();
        assert_eq!(m.get(5, 3), 11);
        assert_eq!(m.dimensions(), (6, 4));
    }

    #[test]
    fn test_from_triplets_converts_through_f64() {
        let entries = [(0, 2, 1.5), (3, 0, -2.0), (1, 1, 4.0)];

        let mut m: CsrMatrix<f32> = CsrMatrix::from_triplets(&entries).unwrap();
        assert!(!m.is_compressed());
        m.compress().unwrap();
        assert_eq!(m.get(0, 2), 1.5f32);
        assert_eq!(m.get(3, 0), -2.0f32);

        // Values narrow through MatrixElement::from_f64.
        let mut m: CsrMatrix<i32> = CsrMatrix::from_triplets(&entries).unwrap();
        m.compress().unwrap();
        assert_eq!(m.get(0, 2), 1);
        assert_eq!(m.get(3, 0), -2);
        assert_eq!(m.get(1, 1).to_f64(), 4.0);
    }
}

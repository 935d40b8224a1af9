//! Error types for CSR container operations

/// Errors that can occur while building or compressing a CSR matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrError {
    /// Append was called after the matrix was compressed
    AlreadyCompressed,
    /// The triplet sequence is not strictly ascending by (row, col)
    ///
    /// `position` is the index of the first offending entry; `first` and
    /// `second` are the adjacent (row, col) coordinates that violate the
    /// strict lexicographic order. Equal coordinates (a duplicate entry)
    /// count as a violation.
    UnsortedOrDuplicate {
        position: usize,
        first: (usize, usize),
        second: (usize, usize),
    },
}

impl core::fmt::Display for CsrError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CsrError::AlreadyCompressed => write!(f, "matrix is already compressed"),
            CsrError::UnsortedOrDuplicate {
                position,
                first: (r1, c1),
                second: (r2, c2),
            } => write!(
                f,
                "unsorted or duplicate triplet at {position}: ({r1},{c1}) followed by ({r2},{c2})"
            ),
        }
    }
}

/// Result type for CSR container operations
pub type Result<T> = core::result::Result<T, CsrError>;

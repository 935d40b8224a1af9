//! Strict lexicographic ordering check for triplet sequences

use crate::error::{CsrError, Result};

/// Validate that parallel (row, col) index slices are strictly ascending
/// under lexicographic order.
///
/// Equal adjacent coordinates are a violation: the container stores at
/// most one value per coordinate, so a duplicate is reported the same way
/// as an out-of-order pair. On failure the error names the first
/// offending adjacent pair.
pub fn validate_strict_order(rows: &[usize], cols: &[usize]) -> Result<()> {
    debug_assert_eq!(rows.len(), cols.len());
    for k in 1..rows.len() {
        if (rows[k - 1], cols[k - 1]) >= (rows[k], cols[k]) {
            return Err(CsrError::UnsortedOrDuplicate {
                position: k - 1,
                first: (rows[k - 1], cols[k - 1]),
                second: (rows[k], cols[k]),
            });
        }
    }
    Ok(())
}

use csrmat::{CsrMatrix, MatrixElement, MatrixOperations, SparseMatrix};

fn main() -> csrmat::Result<()> {
    // Score sheet: many examinees (rows), few items (columns).
    let mut scores = CsrMatrix::new();
    scores.append(0, 0, 0.82)?;
    scores.append(0, 2, 0.35)?;
    scores.append(1, 1, 0.91)?;
    // Late arrival for an earlier examinee - spliced in, not rejected.
    scores.append(0, 1, 0.50)?;
    scores.append(4, 0, 0.12)?;
    scores.append(4, 2, 0.77)?;

    scores.compress()?;

    let (nrows, ncols) = scores.dimensions();
    println!("{nrows}x{ncols} matrix, {} stored entries", scores.nnz());

    for row in 0..nrows {
        let entries: Vec<_> = scores.row_view(row).collect();
        println!("row {row}: {entries:?}");
    }

    // Re-grade one item for examinee 0.
    scores.set(0, 2, 0.40);
    println!("regraded (0,2) -> {}", scores.get(0, 2).to_f64());
    println!("item 0 scores in row order: {:?}", scores.get_col(0));

    // Probing a never-appended coordinate is only safe via get_element.
    assert_eq!(scores.get_element(3, 0), None);

    Ok(())
}

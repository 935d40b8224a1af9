use csrmat::CsrMatrix;
use std::time::Instant;

fn main() -> csrmat::Result<()> {
    println!("Append/Compress/Get Throughput");

    // Test parameters: tall matrix, few columns.
    let nrows = 500_000;
    let cols_per_row = 10;
    let nnz = nrows * cols_per_row;

    println!("Matrix: {nrows} rows, {cols_per_row} entries/row, {nnz} entries");

    let data_start = Instant::now();
    let entries: Vec<(usize, usize, f64)> = (0..nrows)
        .flat_map(|row| {
            (0..cols_per_row).map(move |k| (row, k * 2 + row % 2, (row + k) as f64))
        })
        .collect();
    println!(
        "Data generation: {:.3}s",
        data_start.elapsed().as_secs_f64()
    );

    let start = Instant::now();
    let mut m = CsrMatrix::with_capacity(nnz);
    for &(row, col, value) in &entries {
        m.append(row, col, value)?;
    }
    let duration = start.elapsed();
    println!("Append completed in {:.3}s", duration.as_secs_f64());
    println!(
        "Appends/s: {:.0}",
        nnz as f64 / duration.as_secs_f64()
    );

    let start = Instant::now();
    m.compress()?;
    println!(
        "Compress completed in {:.3}s",
        start.elapsed().as_secs_f64()
    );

    let start = Instant::now();
    let mut sum = 0.0;
    for &(row, col, _) in &entries {
        sum += m.get(row, col);
    }
    let duration = start.elapsed();
    println!("Read back {nnz} entries in {:.3}s", duration.as_secs_f64());
    println!("Gets/s: {:.0}", nnz as f64 / duration.as_secs_f64());
    println!("Checksum: {sum}");

    Ok(())
}

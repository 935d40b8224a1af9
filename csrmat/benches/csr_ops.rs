use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use csrmat::CsrMatrix;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const NROWS: usize = 10_000;
const COLS_PER_ROW: usize = 8;

fn row_major_entries() -> Vec<(usize, usize, f64)> {
    (0..NROWS)
        .flat_map(|row| {
            (0..COLS_PER_ROW).map(move |k| {
                let col = (row * 7) % 40 + k * 3;
                (row, col, (row * 64 + col) as f64)
            })
        })
        .collect()
}

fn build(entries: &[(usize, usize, f64)]) -> CsrMatrix<f64> {
    CsrMatrix::from_triplets(entries).unwrap()
}

fn bench_append(c: &mut Criterion) {
    let entries = row_major_entries();
    c.bench_function("append_row_major", |b| {
        b.iter(|| build(black_box(&entries)));
    });
}

fn bench_compress(c: &mut Criterion) {
    let entries = row_major_entries();
    c.bench_function("compress", |b| {
        b.iter_batched(
            || build(&entries),
            |mut m| {
                m.compress().unwrap();
                m
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_get(c: &mut Criterion) {
    let entries = row_major_entries();
    let mut m = build(&entries);
    m.compress().unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let mut probes: Vec<(usize, usize)> =
        entries.iter().map(|&(row, col, _)| (row, col)).collect();
    probes.shuffle(&mut rng);
    probes.truncate(1_000);

    c.bench_function("get_random", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for &(row, col) in &probes {
                sum += m.get(row, col);
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, bench_append, bench_compress, bench_get);
criterion_main!(benches);

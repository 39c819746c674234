use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dense_matrix::Matrix;

/// Sequential matrix with a boosted diagonal so it stays invertible.
fn make_matrix(n: usize) -> Matrix {
    let mut m = Matrix::square(n).unwrap();
    m.fill_sequential();
    for i in 0..n {
        *m.entry_mut(i, i).unwrap() += (n * n) as f64;
    }
    m
}

fn run_determinant_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");
    for n in [3, 5, 7, 8] {
        let m = make_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| b.iter(|| black_box(m).determinant()));
    }
    let fixed = dense_matrix::test_matrix!([1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]).unwrap();
    group.bench_function("fixed 4", |b| b.iter(|| black_box(&fixed).determinant()));
    group.finish();
}

fn run_inverse_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    for n in [3, 5, 6] {
        let m = make_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| b.iter(|| black_box(m).inverse_matrix()));
    }
    group.finish();
}

fn run_multiplication_bench(c: &mut Criterion) {
    let left = make_matrix(64);
    let right = make_matrix(64);
    c.bench_function("multiplication 64", |b| b.iter(|| black_box(&left) * black_box(&right)));
}

criterion_group!(
    name = determinant_bench;
    config = Criterion::default();
    targets = run_determinant_bench
);

criterion_group!(
    name = inverse_bench;
    config = Criterion::default();
    targets = run_inverse_bench
);

criterion_group!(
    name = multiplication_bench;
    config = Criterion::default();
    targets = run_multiplication_bench
);

criterion_main!(determinant_bench, inverse_bench, multiplication_bench);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matra_la::Matrix;

const SIZES: &[usize] = &[16, 32, 64, 128];

fn test_matrix(n: usize) -> Matrix<f64> {
    // Deterministic, well-conditioned: diagonally dominant.
    Matrix::from_fn(n, n, |i, j| {
        if i == j {
            n as f64
        } else {
            ((i * 31 + j * 17) % 7) as f64 - 3.0
        }
    })
    .unwrap()
}

fn mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for &n in SIZES {
        group.throughput(Throughput::Elements((n * n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let a = test_matrix(n);
            let v = test_matrix(n);
            b.iter(|| black_box(a.mul_mat(&v).unwrap()))
        });
    }
    group.finish();
}

fn elimination(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_upper_triangle");
    for &n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let a = test_matrix(n);
            b.iter(|| black_box(a.to_upper_triangle()))
        });
    }
    group.finish();
}

fn determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");
    for &n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let a = test_matrix(n);
            b.iter(|| black_box(a.determinant().unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, mul, elimination, determinant);
criterion_main!(benches);

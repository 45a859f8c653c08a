//! Montgomery ladder benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use m383::{ProjectivePoint, Scalar, affine_x, ladder};
use std::hint::black_box;

fn test_scalar() -> Scalar {
    Scalar::from_be_hex(
        "0d6a2c1e2b0f8e9a3c5d7f01a2b4c6d8e0f1a3b5c7d9e1f203a5b7c9d1e3f5a70b2d4f6a8c0e2a4c6e8b0d2f4a6c8e17",
    )
}

fn bench_ladder<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let k = test_scalar();
    let q = ProjectivePoint::GENERATOR;
    group.bench_function("ladder", |b| b.iter(|| ladder(black_box(&k), black_box(&q))));
}

fn bench_double<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let q = ProjectivePoint::GENERATOR;
    group.bench_function("double", |b| b.iter(|| black_box(q).double()));
}

fn bench_differential_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let q = ProjectivePoint::GENERATOR;
    let q2 = q.double();
    group.bench_function("differential_add", |b| {
        b.iter(|| black_box(q2).differential_add(black_box(&q), black_box(&q)))
    });
}

fn bench_affine_x<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let point = ProjectivePoint::GENERATOR.double();
    group.bench_function("affine_x", |b| b.iter(|| affine_x(black_box(&point))));
}

fn bench_point_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("x-only point operations");
    bench_double(&mut group);
    bench_differential_add(&mut group);
    bench_affine_x(&mut group);
    bench_ladder(&mut group);
    group.finish();
}

criterion_group!(benches, bench_point_ops);
criterion_main!(benches);

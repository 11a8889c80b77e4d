use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polyroot::{
    function,
    roots::{find_roots_in_interval, find_roots_with, newton_raphson, NewtonOptions, ScanOptions},
    Polynomial,
};
use std::hint::black_box;

/// Wilkinson-style product `(x - 1)(x - 2)...(x - n)`, expanded into terms
fn gen_polynomial(n: u32) -> Polynomial {
    let mut coefs = vec![1.0];
    for r in 1..=n {
        let mut next = vec![0.0; coefs.len() + 1];
        for (i, c) in coefs.iter().enumerate() {
            next[i + 1] += c;
            next[i] -= c * f64::from(r);
        }
        coefs = next;
    }

    coefs
        .into_iter()
        .enumerate()
        .rev()
        .map(|(e, c)| (c, e as u32))
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let options = NewtonOptions::default();

    //
    // Single runs
    println!("Benchmarking single Newton-Raphson runs...");
    function!(quadratic(x) = 1 x^2 - 4);
    function!(cubic(x) = 1 x^3 - 2.5 x^2 - 2 x + 1.5);
    let mut group = c.benchmark_group("newton_raphson");
    group.bench_function("quadratic", |b| {
        b.iter(|| newton_raphson(black_box(&quadratic), black_box(3.0), &options))
    });
    group.bench_function("cubic", |b| {
        b.iter(|| newton_raphson(black_box(&cubic), black_box(4.0), &options))
    });
    group.bench_function("no_root", |b| {
        let f = function!(1 x^2 + 1);
        b.iter(|| newton_raphson(black_box(&f), black_box(0.5), &options))
    });
    group.finish();

    //
    // Now how the scan scales with degree
    println!("Benchmarking interval scan vs degree (-1..=12, step=0.1)...");
    let mut group = c.benchmark_group("scan_vs_degree");
    for n in [2, 4, 6, 8, 10] {
        let f = gen_polynomial(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &f, |b, f| {
            b.iter(|| find_roots_in_interval(black_box(f), -1.0..=12.0, &options))
        });
    }
    group.finish();

    //
    // And with the scan step
    println!("Benchmarking interval scan vs step (degree=6)...");
    let f = gen_polynomial(6);
    let mut group = c.benchmark_group("scan_vs_step");
    for step in [0.5, 0.1, 0.01] {
        let scan = ScanOptions::new(options, step).expect("valid step");
        group.bench_with_input(BenchmarkId::from_parameter(step), &scan, |b, scan| {
            b.iter(|| find_roots_with(black_box(&f), -1.0..=12.0, scan))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

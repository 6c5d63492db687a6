//! Transcript benchmarks for gosp.
//!
//! Measures lexing, parsing, type checking and evaluation together, the way a
//! host request runs them.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gospc::{evaluate_source, new_state};
use std::hint::black_box;

const PRELUDE: &str = "(defun sq (x double) (* x x))";

fn generate_calls(n: usize) -> String {
    (0..n)
        .map(|i| format!("(+ (sq {i}) (let y {i} (- y 1)) (map sq [1 2 3]))"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_arithmetic(c: &mut Criterion) {
    c.bench_function("transcript/arithmetic", |b| {
        b.iter(|| {
            let mut state = new_state();
            black_box(evaluate_source(&mut state, "bench", "(+ 1 2 (* 3 4) (/ 10 4))"));
        });
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript/calls");
    for n in [10, 100, 1000] {
        let source = generate_calls(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, source| {
            b.iter(|| {
                let mut state = new_state();
                evaluate_source(&mut state, "prelude", PRELUDE);
                black_box(evaluate_source(&mut state, "bench", source));
            });
        });
    }
    group.finish();
}

fn bench_errors(c: &mut Criterion) {
    let source = "(sq 1 2)\n".repeat(100);
    c.bench_function("transcript/errors", |b| {
        b.iter(|| {
            let mut state = new_state();
            evaluate_source(&mut state, "prelude", PRELUDE);
            black_box(evaluate_source(&mut state, "bench", &source));
        });
    });
}

criterion_group!(benches, bench_arithmetic, bench_scaling, bench_errors);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use promptc_core::estimate_tokens;
use std::hint::black_box;

const SAMPLE: &str = include_str!("../src/spec.rs");

fn bench_estimate_tokens(c: &mut Criterion) {
    c.bench_function("estimator/estimate_tokens_file", |b| {
        b.iter(|| black_box(estimate_tokens(black_box(SAMPLE))));
    });

    c.bench_function("estimator/estimate_tokens_short", |b| {
        b.iter(|| black_box(estimate_tokens(black_box("Write a report on AI"))));
    });
}

criterion_group!(benches, bench_estimate_tokens);
criterion_main!(benches);

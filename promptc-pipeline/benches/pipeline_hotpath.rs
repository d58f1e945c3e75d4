use criterion::{criterion_group, criterion_main, Criterion};
use promptc_core::ArtifactId;
use promptc_pipeline::{parse, select};
use std::hint::black_box;

fn sample_blocks() -> Vec<promptc_core::ArtifactBlock> {
    (0..20)
        .map(|i| promptc_core::ArtifactBlock {
            id: promptc_core::BlockId::from(format!("blk-{i}")),
            label: format!("Block {i}"),
            content: "Always validate AI outputs before deployment.".repeat(3),
            tags: ["background".to_string()].into_iter().collect(),
            priority: (i % 100) as u8,
            do_not_send: i % 7 == 0,
            token_count: 10 + i as u32,
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("pipeline/parse_intent", |b| {
        b.iter(|| black_box(parse(black_box("Explain @ai safety in a formal tone for a technical audience"), None)));
    });
}

fn bench_select(c: &mut Criterion) {
    let blocks = sample_blocks();
    c.bench_function("pipeline/select_blocks", |b| {
        b.iter(|| {
            black_box(select(
                black_box(&blocks),
                black_box(&["background".to_string()]),
                black_box(Some(120)),
                ArtifactId::from("art-ai"),
                "AI",
            ))
        });
    });
}

criterion_group!(benches, bench_parse, bench_select);
criterion_main!(benches);

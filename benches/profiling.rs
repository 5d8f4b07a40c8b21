use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use corpus_profile::{InMemorySource, ProfileOptions, profile};

fn synthetic_corpus(units: usize) -> Vec<String> {
    (0..units)
        .map(|i| format!("<p>Row {i}: the quick brown fox_{} jumps over the lazy dog!</p>", i % 97))
        .collect()
}

fn benchmark_profile(c: &mut Criterion) {
    let texts = synthetic_corpus(10_000);
    let source = InMemorySource::from_texts(texts.iter().map(String::as_str));

    let mut group = c.benchmark_group("profile");
    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("all_metrics", |b| {
        b.iter(|| black_box(profile(&source, &ProfileOptions::default()).expect("profiling succeeds")))
    });
    group.bench_function("base_only", |b| {
        b.iter(|| black_box(profile(&source, &ProfileOptions::base_only()).expect("profiling succeeds")))
    });
    group.finish();
}

criterion_group!(benches, benchmark_profile);
criterion_main!(benches);

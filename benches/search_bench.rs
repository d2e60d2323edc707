//! Search benchmarks.
//!
//! Measures the expansion step on its own and the full pipeline as the corpus
//! grows.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `expand` | Genre lookup + flatten for a leaf, a mid-level and the root genre |
//! | `full_pipeline` | Expansion + corpus scan + sort on the sample corpus |
//! | `scaling` | Full-pipeline throughput as the corpus grows from 1k to 100k lines |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kex_core::{builtin, expand, search, Dictionary, MatchMode};

const KEYWORDS: &[&str] = &["Boss", "ギター", "音楽"];

fn synthetic_corpus(n: usize) -> Vec<String> {
    let sample = builtin::sample_corpus();
    (0..n)
        .map(|i| format!("{} #{i}", sample[i % sample.len()]))
        .collect()
}

// ---------------------------------------------------------------------------
// Expansion only
// ---------------------------------------------------------------------------

fn expand_bench(c: &mut Criterion) {
    let dict = Dictionary::builtin();
    let mut group = c.benchmark_group("expand");

    for keyword in KEYWORDS {
        group.bench_with_input(BenchmarkId::from_parameter(keyword), keyword, |b, k| {
            b.iter(|| expand(black_box(k), &dict, MatchMode::Pattern))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Full pipeline on the sample corpus
// ---------------------------------------------------------------------------

fn full_pipeline_bench(c: &mut Criterion) {
    let dict = Dictionary::builtin();
    let corpus = builtin::sample_corpus();
    let mut group = c.benchmark_group("full_pipeline");

    for keyword in KEYWORDS {
        group.bench_with_input(BenchmarkId::from_parameter(keyword), keyword, |b, k| {
            b.iter(|| search(black_box(k), &dict, &corpus).unwrap())
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling: corpus size axis
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let dict = Dictionary::builtin();
    let mut group = c.benchmark_group("scaling");

    for size in [1_000usize, 10_000, 100_000] {
        let corpus = synthetic_corpus(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("music", size), &corpus, |b, corpus| {
            b.iter(|| search("音楽", &dict, corpus).unwrap())
        });
    }

    group.finish();
}

criterion_group!(search_benches, expand_bench, full_pipeline_bench, scaling_bench);
criterion_main!(search_benches);

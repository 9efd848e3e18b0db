//! Benchmarks for the sweep components.
//!
//! Run with: cargo bench -p folio-engine

use std::hint::black_box;
use std::ops::ControlFlow;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use folio_core::Combination;
use folio_engine::{evaluate_batch, evaluate_streaming_collect, EngineConfig};
use folio_ext_file::bundled_registry;
use folio_portfolio::combinations::{binomial, for_each_subset};
use folio_portfolio::Evaluator;

// =============================================================================
// ENUMERATION
// =============================================================================

fn bench_enumerator(c: &mut Criterion) {
    let mut group = c.benchmark_group("for_each_subset");
    let items: Vec<u32> = (0..40).collect();

    for k in [2usize, 3, 4] {
        group.throughput(Throughput::Elements(binomial(40, k as u64)));
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            let mut buf = vec![0u32; k];
            b.iter(|| {
                let mut acc = 0u64;
                let _ = for_each_subset(&items, &mut buf, |s| {
                    acc += u64::from(s[0]);
                    ControlFlow::Continue(())
                });
                black_box(acc)
            });
        });
    }
    group.finish();
}

// =============================================================================
// KERNEL
// =============================================================================

fn bench_kernel(c: &mut Criterion) {
    let registry = bundled_registry().unwrap();
    let combination = Combination::equal_weight(
        ["TSM", "SCV", "LTT", "STT", "GLD"]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    )
    .unwrap();

    c.bench_function("evaluate_golden_butterfly", |b| {
        let mut evaluator = Evaluator::new(&registry);
        b.iter(|| black_box(evaluator.evaluate(black_box(&combination)).unwrap()));
    });

    let reference = evaluator_reference(&registry);
    c.bench_function("evaluate_if_better_rejects", |b| {
        let mut evaluator = Evaluator::new(&registry);
        b.iter(|| {
            black_box(
                evaluator
                    .evaluate_if_as_good_or_better(black_box(&combination), &reference)
                    .unwrap(),
            )
        });
    });
}

fn evaluator_reference(registry: &folio_core::AssetRegistry) -> folio_portfolio::Metrics {
    // Cash never loses money, so its drawdown metrics reject nearly everything.
    Evaluator::new(registry)
        .evaluate(&Combination::single("TBILL"))
        .unwrap()
        .metrics
}

// =============================================================================
// PIPELINES
// =============================================================================

fn bench_pipelines(c: &mut Criterion) {
    let registry = Arc::new(bundled_registry().unwrap());
    let universe = registry.names().to_vec();
    let mut group = c.benchmark_group("pipelines");
    group.sample_size(10);
    group.throughput(Throughput::Elements(binomial(universe.len() as u64, 3)));

    group.bench_function("streaming_k3", |b| {
        let config = EngineConfig::new().with_batch_size(64);
        b.iter(|| {
            evaluate_streaming_collect(Arc::clone(&registry), universe.clone(), 3, None, &config)
                .unwrap()
        });
    });

    let triples: Vec<Combination> = {
        let mut out = Vec::new();
        let names: Vec<&str> = universe.iter().map(String::as_str).collect();
        let mut buf = [""; 3];
        let _ = for_each_subset(&names, &mut buf, |s| {
            out.push(Combination::equal_weight(s.iter().map(|n| (*n).to_string()).collect()).unwrap());
            ControlFlow::Continue(())
        });
        out
    };
    group.bench_function("batch_k3", |b| {
        let workers = EngineConfig::default().resolved_workers();
        b.iter(|| evaluate_batch(&registry, &triples, workers).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_enumerator, bench_kernel, bench_pipelines);
criterion_main!(benches);

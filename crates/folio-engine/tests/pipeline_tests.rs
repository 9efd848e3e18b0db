//! Integration tests for the sweep pipelines.
//!
//! These tests run both pipelines over the bundled dataset and check them
//! against each other and against direct evaluation.

use std::sync::Arc;

use folio_core::{AssetRegistry, Combination};
use folio_engine::{
    evaluate_batch, evaluate_streaming, evaluate_streaming_collect, segment_indexes, EngineConfig,
};
use folio_ext_file::bundled_registry;
use folio_portfolio::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn registry() -> Arc<AssetRegistry> {
    Arc::new(bundled_registry().expect("bundled dataset loads"))
}

fn config() -> EngineConfig {
    EngineConfig::new()
        .with_workers(4)
        .with_batch_size(7)
        .with_channel_capacity(3)
}

fn sorted_lines(stats: &[PortfolioStat]) -> Vec<String> {
    let mut lines: Vec<String> = stats.iter().map(ToString::to_string).collect();
    lines.sort();
    lines
}

fn equal_weight_pairs(names: &[String]) -> Vec<Combination> {
    let mut out = Vec::new();
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            out.push(Combination::equal_weight(vec![a.clone(), b.clone()]).unwrap());
        }
    }
    out
}

// =============================================================================
// STREAMING
// =============================================================================

#[test]
fn test_streaming_matches_batch() {
    let registry = registry();
    let universe = registry.names().to_vec();

    let streamed =
        evaluate_streaming_collect(Arc::clone(&registry), universe.clone(), 2, None, &config())
            .unwrap();
    assert_eq!(streamed.len(), 66);

    let batch = evaluate_batch(&registry, &equal_weight_pairs(&universe), 4).unwrap();
    assert_eq!(sorted_lines(&streamed), sorted_lines(&batch));
}

#[test]
fn test_filtered_sweep_keeps_only_reference() {
    let registry = registry();
    let reference = evaluate_portfolio(
        &registry,
        &Combination::equal_weight(vec!["TSM".into(), "ITT".into()]).unwrap(),
    )
    .unwrap();

    let handle = evaluate_streaming(
        Arc::clone(&registry),
        registry.names().to_vec(),
        2,
        Some(reference.metrics),
        &config(),
    )
    .unwrap();
    let survivors: Vec<PortfolioStat> = handle.iter().collect();
    let progress = handle.join().unwrap();

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].combination.assets(), &["ITT", "TSM"]);
    assert_eq!(progress.evaluated, 66);
    assert_eq!(progress.emitted, 1);
    assert_eq!(progress.rejected(), 65);
}

#[test]
fn test_triples_then_rank() {
    let registry = registry();
    let universe = registry.names().to_vec();
    let stats = evaluate_streaming_collect(registry, universe, 3, None, &config()).unwrap();
    assert_eq!(stats.len(), 220);

    let top = top_n(stats, &Metric::ALL, 10);
    assert_eq!(top.len(), 10);
    let scores: Vec<f64> = top
        .iter()
        .map(|s| folio_portfolio::fused_score(s, &Metric::ALL))
        .collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_single_worker_config() {
    let registry = registry();
    let universe = registry.names().to_vec();
    let config = EngineConfig::new().with_workers(1).with_batch_size(1);
    let stats = evaluate_streaming_collect(registry, universe, 1, None, &config).unwrap();
    assert_eq!(stats.len(), 12);
}

// =============================================================================
// BATCH
// =============================================================================

#[test]
fn test_batch_ladder_in_order() {
    let registry = registry();
    let combos =
        ladder_combinations(&["GLD", "ITT", "TSM"], &percent_ladder(10.0).unwrap()).unwrap();
    let stats = evaluate_batch(&registry, &combos, 5).unwrap();
    assert_eq!(stats.len(), combos.len());
    assert!(stats
        .iter()
        .zip(&combos)
        .all(|(s, c)| &s.combination == c));
}

// =============================================================================
// SEGMENTS
// =============================================================================

proptest! {
    #[test]
    fn segments_cover_count(count in 0usize..10_000, segments in 1usize..64) {
        let bounds = segment_indexes(count, segments);
        prop_assert_eq!(bounds.len(), segments);
        prop_assert_eq!(*bounds.last().unwrap(), count);

        let mut previous = 0;
        let mut lengths = Vec::with_capacity(segments);
        for &b in &bounds {
            prop_assert!(b >= previous);
            lengths.push(b - previous);
            previous = b;
        }
        let min = *lengths.iter().min().unwrap();
        let max = *lengths.iter().max().unwrap();
        prop_assert!(max - min <= 1);
    }
}

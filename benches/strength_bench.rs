// ABOUTME: Criterion benchmarks for e1RM estimation and progression analysis
// ABOUTME: Measures single-set projection, best-estimate selection, and per-day progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for strength estimation.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_history, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftlog::intelligence::{
    build_progression, summarize_progress, E1rmFormula, StrengthConfig, StrengthEstimator,
};

fn bench_single_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("e1rm_single");

    for formula in [E1rmFormula::Brzycki, E1rmFormula::Epley] {
        let estimator = StrengthEstimator::new(StrengthConfig {
            formula,
            ..StrengthConfig::default()
        });
        group.bench_function(formula.name(), |b| {
            b.iter(|| estimator.estimate_with_confidence(black_box(102.5), black_box(5)));
        });
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_best_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_e1rm");
    let estimator = StrengthEstimator::default();

    for size in [HistorySize::Small, HistorySize::Medium, HistorySize::Large] {
        let history = generate_history(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("best", size.count()),
            &history,
            |b, history| b.iter(|| estimator.best(black_box(history))),
        );
        group.bench_with_input(
            BenchmarkId::new("estimate_all", size.count()),
            &history,
            |b, history| b.iter(|| estimator.estimate_all(black_box(history))),
        );
    }

    group.finish();
}

#[allow(clippy::cast_possible_truncation)]
fn bench_progression(c: &mut Criterion) {
    let mut group = c.benchmark_group("progression");
    let estimator = StrengthEstimator::default();

    for size in [HistorySize::Medium, HistorySize::Large] {
        let history = generate_history(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("build_progression", size.count()),
            &history,
            |b, history| {
                b.iter(|| build_progression(&estimator, black_box(history)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("summarize_progress", size.count()),
            &history,
            |b, history| {
                b.iter(|| summarize_progress(&estimator, black_box(history)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_estimate,
    bench_best_estimate,
    bench_progression,
);
criterion_main!(benches);

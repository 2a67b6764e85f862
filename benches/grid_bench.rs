//! Grid engine micro-benchmarks.
//!
//! Covers board generation, the dead-board search, and a full hinted swap
//! with its cascade on the default 9x6 arena grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use arena_match::core::GridConfig;
use arena_match::engine::MatchEngine;
use arena_match::grid;

fn bench_generate(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("engine.generate.9x6", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(MatchEngine::new(GridConfig::default(), seed).ok())
        });
    });
}

fn bench_move_search(c: &mut Criterion) {
    let engine = MatchEngine::new(GridConfig::default(), 20261019).ok();
    let Some(engine) = engine else { return };
    let board = engine.grid().clone();

    c.bench_function("grid.has_possible_moves", |b| {
        b.iter(|| black_box(grid::has_possible_moves(black_box(&board))));
    });
    c.bench_function("grid.find_matches", |b| {
        b.iter(|| black_box(grid::find_matches(black_box(&board))));
    });
}

fn bench_hinted_swap(c: &mut Criterion) {
    c.bench_function("engine.attempt_swap.hinted", |b| {
        b.iter_batched(
            || MatchEngine::new(GridConfig::default(), 777).ok(),
            |engine| {
                let Some(mut engine) = engine else { return };
                if let Some((a, b)) = engine.find_possible_move() {
                    black_box(engine.attempt_swap(a, b).ok());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_generate, bench_move_search, bench_hinted_swap);
criterion_main!(benches);

//! Opponent Engine Benchmarks
//!
//! Performance benchmarks for the search hot paths using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use opponent_engine::evaluation::features::encode_position;
use opponent_engine::search::order_moves;
use opponent_engine::{Engine, EngineConfig, Evaluator, Game, SearchLimits};
use std::time::Duration;

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_order_moves(c: &mut Criterion) {
    let game = Game::from_fen(MIDDLEGAME).unwrap();

    c.bench_function("order_moves_middlegame", |b| {
        b.iter(|| black_box(order_moves(&game)))
    });
}

fn bench_evaluate_uncached(c: &mut Criterion) {
    let game = Game::from_fen(MIDDLEGAME).unwrap();
    let mut evaluator = Evaluator::default();

    c.bench_function("evaluate_uncached", |b| {
        b.iter(|| {
            evaluator.clear_cache();
            black_box(evaluator.evaluate(&game))
        })
    });
}

fn bench_encode_position(c: &mut Criterion) {
    let game = Game::from_fen(MIDDLEGAME).unwrap();

    c.bench_function("encode_position", |b| {
        b.iter(|| black_box(encode_position(game.position())))
    });
}

fn bench_search_depth_3(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    group.bench_function("middlegame_depth_3", |b| {
        b.iter(|| {
            let mut engine = Engine::new(EngineConfig {
                use_book: false,
                ..EngineConfig::default()
            })
            .unwrap();
            let mut game = Game::from_fen(MIDDLEGAME).unwrap();
            let limits = SearchLimits::new(Duration::from_secs(60), 3);
            black_box(engine.select_move_with_limits(&mut game, limits).unwrap())
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_order_moves,
    bench_evaluate_uncached,
    bench_encode_position,
    bench_search_depth_3,
);
criterion_main!(benches);

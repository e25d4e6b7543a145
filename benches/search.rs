//! Search benchmarks
//!
//! Hot paths of the engine: move application, static evaluation, playouts,
//! and fixed-depth alpha-beta.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use squadro_ai::core::{Board, GameRng};
use squadro_ai::search::{evaluate, rollout, AlphaBeta, Deadline};

fn bench_apply_all_moves(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("apply_all_moves_start", |b| {
        b.iter(|| {
            for piece in board.legal_moves() {
                let mut child = board.clone();
                black_box(child.apply_move(piece).ok());
            }
        })
    });
}

fn bench_evaluate_start(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("evaluate_start", |b| b.iter(|| black_box(evaluate(&board))));
}

fn bench_rollout(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("rollout_100_start", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| black_box(rollout(&board, 100, &mut rng, 10_000).ok()))
    });
}

fn bench_alphabeta_depth_6(c: &mut Criterion) {
    let board = Board::new();
    let deadline = Deadline::unbounded();

    c.bench_function("alphabeta_depth_6_start", |b| {
        b.iter(|| {
            let mut search = AlphaBeta::new(&deadline);
            black_box(search.search_full(&board, 6, true).ok())
        })
    });
}

criterion_group!(
    benches,
    bench_apply_all_moves,
    bench_evaluate_start,
    bench_rollout,
    bench_alphabeta_depth_6,
);
criterion_main!(benches);

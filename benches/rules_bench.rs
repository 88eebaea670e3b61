//! Rules Benchmarks
//!
//! Board construction dominates every operation, so these measure it directly
//! and through move application and perft.

use chess_rules::{perft, Board};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_standard_board(c: &mut Criterion) {
    c.bench_function("standard_board", |b| b.iter(|| black_box(Board::standard())));
}

fn bench_legal_moves_starting(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(board.current_player().legal_moves().len()))
    });
}

fn bench_make_move(c: &mut Criterion) {
    let board = Board::standard();
    let mv = board.find_move(52, 36).unwrap();

    c.bench_function("make_move_e2e4", |b| {
        b.iter(|| black_box(board.current_player().make_move(&mv).unwrap()))
    });
}

fn bench_outcome_starting(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("outcome_starting_position", |b| {
        b.iter(|| black_box(board.outcome()))
    });
}

fn bench_perft_depth_2(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("perft_depth_2", |b| b.iter(|| black_box(perft(&board, 2).unwrap())));
}

criterion_group!(
    benches,
    bench_standard_board,
    bench_legal_moves_starting,
    bench_make_move,
    bench_outcome_starting,
    bench_perft_depth_2
);
criterion_main!(benches);

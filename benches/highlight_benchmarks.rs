//! Benchmarks for highlight computation and move application.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Board, BoardBuilder, Color, Coordinate, PieceKind};
use chess_rules::playout::{legal_drops, play_random};

fn middlegame() -> Board {
    let mut board = Board::new();
    play_random(&mut board, 24, 0x5eed);
    board
}

fn bench_highlights(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlights");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(legal_drops(&startpos))));

    let middle = middlegame();
    group.bench_function("middlegame", |b| b.iter(|| black_box(legal_drops(&middle))));

    // Three defenders pinned to their king
    let checked = BoardBuilder::new()
        .piece(Coordinate::at(5, 1), Color::White, PieceKind::King)
        .piece(Coordinate::at(5, 3), Color::White, PieceKind::Rook)
        .piece(Coordinate::at(3, 3), Color::White, PieceKind::Bishop)
        .piece(Coordinate::at(6, 2), Color::White, PieceKind::Knight)
        .piece(Coordinate::at(5, 8), Color::Black, PieceKind::King)
        .piece(Coordinate::at(5, 7), Color::Black, PieceKind::Queen)
        .piece(Coordinate::at(1, 5), Color::Black, PieceKind::Bishop)
        .piece(Coordinate::at(8, 4), Color::Black, PieceKind::Bishop)
        .build()
        .expect("valid position");
    group.bench_function("pinned", |b| b.iter(|| black_box(legal_drops(&checked))));

    group.finish();
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");

    for plies in [10usize, 40] {
        group.bench_with_input(BenchmarkId::new("random", plies), &plies, |b, &plies| {
            b.iter(|| {
                let mut board = Board::new();
                black_box(play_random(&mut board, plies, 42))
            })
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let board = middlegame();
    c.bench_function("snapshot_restore", |b| {
        b.iter(|| black_box(Board::restore(&board.snapshot())))
    });
}

criterion_group!(benches, bench_highlights, bench_playout, bench_snapshot);
criterion_main!(benches);

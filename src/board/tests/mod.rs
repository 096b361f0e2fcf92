//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movement.rs` - Raw movement per piece family
//! - `special_moves.rs` - Double advance, en passant and castling
//! - `check.rs` - Threats, check state and checkmate
//! - `legality.rs` - Highlight filtering, pins and turn handling
//! - `proptest.rs` - Property-based tests over random playouts

mod legality;

use crate::board::{Board, BoardBuilder, Color, Coordinate, PieceId, PieceKind};

pub(super) fn sq(x: i8, y: i8) -> Coordinate {
    Coordinate::at(x, y)
}

/// Id of the live piece on `(x, y)`; panics if the square is empty.
pub(super) fn id_at(board: &Board, x: i8, y: i8) -> PieceId {
    board
        .piece_at(sq(x, y))
        .unwrap_or_else(|| panic!("no piece on {}", sq(x, y)))
        .id()
}

pub(super) fn sorted(mut squares: Vec<Coordinate>) -> Vec<Coordinate> {
    squares.sort();
    squares
}

pub(super) fn squares(list: &[(i8, i8)]) -> Vec<Coordinate> {
    sorted(list.iter().map(|&(x, y)| sq(x, y)).collect())
}

/// Kings on h2 and h7, out of the way of pieces placed in the middle.
pub(super) fn kings_aside() -> BoardBuilder {
    BoardBuilder::new()
        .piece(sq(8, 2), Color::White, PieceKind::King)
        .piece(sq(8, 7), Color::Black, PieceKind::King)
}

/// Play a drop by origin and destination, asserting it is applied.
pub(super) fn play(board: &mut Board, from: (i8, i8), to: (i8, i8)) {
    let id = id_at(board, from.0, from.1);
    let outcome = board.on_drop(id, sq(to.0, to.1));
    assert!(outcome.applied, "{} -> {} was refused", sq(from.0, from.1), sq(to.0, to.1));
}

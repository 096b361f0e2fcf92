//! Seeded random playouts.
//!
//! Picks uniformly among every highlighted drop of the side to move and
//! plays it through [`Board::on_drop`]. Used by the CLI, the benches and the
//! property tests to reach positions a fixed fixture would not.

use rand::prelude::*;

use crate::board::{Board, Coordinate, MoveOutcome, PieceId};

/// Every `(piece, destination)` drop the side to move may make.
#[must_use]
pub fn legal_drops(board: &Board) -> Vec<(PieceId, Coordinate)> {
    let side = board.side_to_move();
    board
        .pieces_of(side)
        .flat_map(|piece| {
            let id = piece.id();
            board
                .on_drag_start(id)
                .into_iter()
                .map(move |dest| (id, dest))
        })
        .collect()
}

/// Play one random drop. `None` when the side to move has nothing to play
/// (checkmate, or a position with no legal drop).
pub fn random_drop<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<MoveOutcome> {
    let &(id, dest) = legal_drops(board).choose(rng)?;
    Some(board.on_drop(id, dest))
}

/// Play up to `plies` random drops from a seeded generator, stopping early
/// when no drop is available. Returns the number of plies played.
pub fn play_random(board: &mut Board, plies: usize, seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = 0;
    while played < plies {
        match random_drop(board, &mut rng) {
            Some(outcome) if outcome.applied => played += 1,
            _ => break,
        }
    }
    played
}

//! Raw movement: where a piece could go, ignoring whether its own king
//! would be left in check.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use pawns::pawn_diagonals;

use super::{Board, Coordinate, Piece, PieceId, PieceKind};

/// How a sliding scan treats enemy pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanMode {
    /// Include the first enemy square as a capture and stop.
    StopAtFirstEnemy,
    /// Record enemy squares and keep walking; only friendly pieces stop the
    /// scan. Used to see through pinned pieces to the king behind them.
    ThroughEnemies,
}

impl Board {
    /// Candidate destinations for a live piece; empty for unknown or
    /// captured ids. The scan mode only affects sliders.
    #[must_use]
    pub fn calculate_movement(&self, id: PieceId, mode: ScanMode) -> Vec<Coordinate> {
        match self.piece(id) {
            Some(piece) => self.movement_of(piece, mode),
            None => Vec::new(),
        }
    }

    pub(crate) fn movement_of(&self, piece: &Piece, mode: ScanMode) -> Vec<Coordinate> {
        match piece.kind {
            PieceKind::Pawn => self.pawn_movement(piece),
            PieceKind::Knight => self.knight_movement(piece),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                self.sliding_movement(piece, piece.kind.directions(), mode)
            }
            PieceKind::King => self.king_movement(piece),
        }
    }

    /// True if `at` is empty or holds a piece of the other color
    #[inline]
    pub(crate) fn is_open_for(&self, piece: &Piece, at: Coordinate) -> bool {
        self.color_on(at).map_or(true, |color| color != piece.color)
    }
}

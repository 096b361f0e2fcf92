use super::super::rays::knight_jumps;
use super::super::{Board, Coordinate, Piece};

impl Board {
    pub(crate) fn knight_movement(&self, piece: &Piece) -> Vec<Coordinate> {
        knight_jumps(piece.position)
            .iter()
            .copied()
            .filter(|&to| self.is_open_for(piece, to))
            .collect()
    }
}

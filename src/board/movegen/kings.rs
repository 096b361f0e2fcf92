use super::super::{Board, Coordinate, Direction, Piece};

impl Board {
    /// One step in each of the eight directions.
    pub(crate) fn king_movement(&self, piece: &Piece) -> Vec<Coordinate> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| piece.position.step(dir))
            .filter(|&to| self.is_open_for(piece, to))
            .collect()
    }
}

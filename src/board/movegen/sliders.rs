use super::super::rays::ray;
use super::super::{Board, Coordinate, Direction, Piece};
use super::ScanMode;

impl Board {
    /// Walk each direction in order until the board edge or a blocker.
    pub(crate) fn sliding_movement(
        &self,
        piece: &Piece,
        directions: &[Direction],
        mode: ScanMode,
    ) -> Vec<Coordinate> {
        let mut targets = Vec::new();
        for &dir in directions {
            for &to in ray(piece.position, dir) {
                match self.color_on(to) {
                    None => targets.push(to),
                    Some(color) if color == piece.color => break,
                    Some(_) => {
                        targets.push(to);
                        if mode == ScanMode::StopAtFirstEnemy {
                            break;
                        }
                    }
                }
            }
        }
        targets
    }
}

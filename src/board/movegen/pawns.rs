use super::super::{Board, Coordinate, Piece, PieceId, PieceKind};

impl Board {
    /// Single step forward onto an empty square, plus forward diagonals that
    /// hold an enemy. Double steps and en passant are special moves.
    pub(crate) fn pawn_movement(&self, piece: &Piece) -> Vec<Coordinate> {
        let mut moves = Vec::with_capacity(3);
        let dir = piece.color.pawn_direction();

        if let Some(forward) = piece.position.offset(0, dir) {
            if !self.is_occupied(forward) {
                moves.push(forward);
            }
        }

        for target in pawn_diagonals(piece) {
            if self.color_on(target).is_some_and(|color| color != piece.color) {
                moves.push(target);
            }
        }

        moves
    }

    /// The pawn's own square when one of its forward diagonals holds the
    /// enemy king. Pawns have no line of attack, only adjacency.
    #[must_use]
    pub fn pawn_threat_origin(&self, id: PieceId) -> Option<Coordinate> {
        let pawn = self.piece(id).filter(|p| p.kind == PieceKind::Pawn)?;
        let king = self.king(pawn.color.opponent())?;
        pawn_diagonals(pawn)
            .any(|sq| sq == king.position)
            .then_some(pawn.position)
    }
}

/// On-board forward diagonals of a pawn, regardless of occupancy.
pub(crate) fn pawn_diagonals(pawn: &Piece) -> impl Iterator<Item = Coordinate> {
    let dir = pawn.color.pawn_direction();
    let from = pawn.position;
    [-1, 1].into_iter().filter_map(move |dx| from.offset(dx, dir))
}

use super::{Board, Color, PieceKind};

#[cfg(debug_assertions)]
impl Board {
    /// Panic if the square index and the piece arena disagree, or if a side
    /// does not have exactly one king.
    pub(crate) fn debug_validate(&self) {
        for (idx, slot) in self.squares.iter().enumerate() {
            if let Some(id) = slot {
                let piece = &self.pieces[id.index()];
                assert!(!piece.captured, "captured {} still indexed", piece.label());
                assert_eq!(
                    piece.position.index(),
                    idx,
                    "{} indexed on the wrong square",
                    piece.label()
                );
            }
        }
        for piece in self.pieces() {
            assert_eq!(
                self.squares[piece.position.index()],
                Some(piece.id),
                "{} missing from the square index",
                piece.label()
            );
        }
        for color in Color::BOTH {
            let kings = self
                .pieces_of(color)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            assert_eq!(kings, 1, "{color} has {kings} kings");
        }
    }
}

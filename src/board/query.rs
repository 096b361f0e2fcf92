//! Board queries: occupancy and piece lookup.
//!
//! Captured pieces are invisible to everything here.

use std::fmt::{self, Write as _};

use super::{Board, Color, Coordinate, Piece, PieceId, PieceKind};

impl Board {
    /// The live piece on `at`, if any. Off-board coordinates hold nothing.
    #[must_use]
    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        if !at.is_valid() {
            return None;
        }
        self.squares[at.index()].map(|id| &self.pieces[id.index()])
    }

    #[must_use]
    pub fn is_occupied(&self, at: Coordinate) -> bool {
        self.piece_at(at).is_some()
    }

    /// Color of the piece on `at`
    #[must_use]
    pub fn color_on(&self, at: Coordinate) -> Option<Color> {
        self.piece_at(at).map(Piece::color)
    }

    /// A live piece by id
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).filter(|p| !p.captured)
    }

    /// Any piece by id, captured ones included
    #[must_use]
    pub fn piece_record(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Live pieces in id order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(|p| !p.captured)
    }

    /// Live pieces of one color in id order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    /// Captured pieces in id order
    pub fn captured_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(|p| p.captured)
    }

    #[must_use]
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of(color).find(|p| p.kind == PieceKind::King)
    }

    /// Id of the live piece with this label (`pawn-white-3`)
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<PieceId> {
        self.pieces().find(|p| p.label() == label).map(Piece::id)
    }

    /// Text diagram, rank 8 at the top. White pieces are upper case and
    /// empty `highlights` squares are marked `*`.
    #[must_use]
    pub fn diagram(&self, highlights: &[Coordinate]) -> String {
        const RULE: &str = "  +---+---+---+---+---+---+---+---+\n";
        let mut out = String::from(RULE);
        for y in (1..=8).rev() {
            let _ = write!(out, "{y} |");
            for x in 1..=8 {
                let sq = Coordinate::at(x, y);
                let ch = match self.piece_at(sq) {
                    Some(p) if p.color == Color::White => p.kind.to_char().to_ascii_uppercase(),
                    Some(p) => p.kind.to_char(),
                    None if highlights.contains(&sq) => '*',
                    None => ' ',
                };
                let _ = write!(out, " {ch} |");
            }
            out.push('\n');
            out.push_str(RULE);
        }
        out.push_str("    a   b   c   d   e   f   g   h\n");
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.diagram(&[]))
    }
}

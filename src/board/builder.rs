//! Fluent builder for arbitrary positions.
//!
//! Pieces receive ids in the order they are added.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Coordinate, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece(Coordinate::at(5, 1), Color::White, PieceKind::King)
//!     .piece(Coordinate::at(5, 8), Color::Black, PieceKind::King)
//!     .piece(Coordinate::at(1, 2), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{
    Board, Color, Coordinate, MoveHistory, PieceKind, RulesConfig, SavedGame, SavedPiece,
    SnapshotError,
};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<SavedPiece>,
    side_to_move: Color,
    config: RulesConfig,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            config: RulesConfig::default(),
        }
    }

    /// Start from the standard initial position, with the same ids as
    /// [`Board::new`].
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for piece in board.pieces() {
            builder = builder.piece(piece.position(), piece.color(), piece.kind());
        }
        builder
    }

    /// Place an unmoved piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, at: Coordinate, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|p| (p.x, p.y) != (at.x, at.y));
        let mut saved = SavedPiece::new(kind, color, at);
        if kind.tracks_first_move() {
            saved.has_moved = Some(false);
        }
        self.pieces.push(saved);
        self
    }

    /// Place a piece that has already moved. Such kings and rooks cannot
    /// castle and such pawns cannot double-advance.
    #[must_use]
    pub fn moved_piece(self, at: Coordinate, color: Color, kind: PieceKind) -> Self {
        let mut builder = self.piece(at, color, kind);
        if let Some(saved) = builder.pieces.last_mut().filter(|_| kind.tracks_first_move()) {
            saved.has_moved = Some(true);
        }
        builder
    }

    /// Mark the pawn on `at` as having double-advanced on the last ply,
    /// opening the en passant window against it. No-op for other squares.
    #[must_use]
    pub fn just_double_advanced(mut self, at: Coordinate) -> Self {
        if let Some(pawn) = self
            .pieces
            .iter_mut()
            .find(|p| (p.x, p.y) == (at.x, at.y) && p.kind == PieceKind::Pawn)
        {
            pawn.has_moved = Some(true);
            pawn.just_double_advanced = Some(true);
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, at: Coordinate) -> Self {
        self.pieces.retain(|p| (p.x, p.y) != (at.x, at.y));
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the board. Fails on the same invariant breaches as a restore:
    /// a missing or doubled king, or a piece off the board.
    ///
    /// Pawns placed away from their start rank count as moved. Check state
    /// and checkmate are evaluated for the finished position.
    pub fn build(mut self) -> Result<Board, SnapshotError> {
        for saved in &mut self.pieces {
            if saved.kind == PieceKind::Pawn && saved.y != saved.color.pawn_start_rank() {
                saved.has_moved = Some(true);
            }
        }
        let game = SavedGame {
            pieces: self.pieces,
            history: MoveHistory::new(),
            side_to_move: self.side_to_move,
        };
        Board::restore_with_config(&game, self.config)
    }
}

use super::{
    Color, Coordinate, GameOutcome, MoveHistory, Piece, PieceId, PieceKind, RulesConfig,
};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Every piece ever placed, indexed by `PieceId`. Captured pieces stay as
    /// tombstones so ids are never reused.
    pub(crate) pieces: Vec<Piece>,
    /// Live piece on each square (a1=0 ... h8=63).
    pub(crate) squares: [Option<PieceId>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) history: MoveHistory,
    pub(crate) outcome: Option<GameOutcome>,
    pub(crate) config: RulesConfig,
}

impl Board {
    /// Standard starting position. Ids are handed out White back rank (a-h),
    /// White pawns, Black back rank, Black pawns.
    pub fn new() -> Self {
        Board::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        let mut board = Board::empty(config);
        for color in Color::BOTH {
            let pawn_rank = color.pawn_start_rank();
            for (file, kind) in (1..).zip(BACK_RANK) {
                board.add_piece(kind, color, Coordinate::at(file, color.back_rank()));
            }
            for file in 1..=8 {
                board.add_piece(PieceKind::Pawn, color, Coordinate::at(file, pawn_rank));
            }
        }
        board
    }

    pub(crate) fn empty(config: RulesConfig) -> Self {
        Board {
            pieces: Vec::with_capacity(32),
            squares: [None; 64],
            side_to_move: Color::White,
            history: MoveHistory::new(),
            outcome: None,
            config,
        }
    }

    /// Place a new piece and assign it the next id.
    pub(crate) fn add_piece(&mut self, kind: PieceKind, color: Color, at: Coordinate) -> PieceId {
        debug_assert!(at.is_valid(), "piece placed off the board at {at}");
        debug_assert!(self.pieces.len() < 256, "piece id space exhausted");
        let id = PieceId(self.pieces.len() as u8);
        let ordinal = self
            .pieces
            .iter()
            .filter(|p| p.kind == kind && p.color == color)
            .count() as u8
            + 1;
        self.pieces.push(Piece::new(id, kind, color, ordinal, at));
        self.occupy(at, id);
        id
    }

    pub(crate) fn occupy(&mut self, at: Coordinate, id: PieceId) {
        let slot = &mut self.squares[at.index()];
        debug_assert!(
            slot.is_none() || *slot == Some(id),
            "two pieces on {at}"
        );
        *slot = Some(id);
    }

    /// Move a piece, keeping the square index in sync. First-move-tracked
    /// pieces are marked as moved.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Coordinate) {
        let from = self.pieces[id.index()].position;
        if self.squares[from.index()] == Some(id) {
            self.squares[from.index()] = None;
        }
        self.occupy(to, id);
        let piece = &mut self.pieces[id.index()];
        piece.position = to;
        if piece.kind.tracks_first_move() {
            piece.has_moved = true;
        }
    }

    /// Tombstone a piece. It keeps its last position for the record.
    pub(crate) fn capture(&mut self, id: PieceId) {
        let piece = &mut self.pieces[id.index()];
        debug_assert!(!piece.captured, "{} captured twice", piece.label());
        piece.captured = true;
        let at = piece.position;
        if self.squares[at.index()] == Some(id) {
            self.squares[at.index()] = None;
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set once checkmate has been declared
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn set_config(&mut self, config: RulesConfig) {
        self.config = config;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

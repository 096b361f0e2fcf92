//! Saved-game shape shared with the browser store.
//!
//! Every piece ever placed is written in id order, captured ones included, so
//! ids in the move log and in `threatenerId` stay meaningful after a reload.
//! Derived fields (castling and en passant destinations) are written for the
//! renderer's benefit and recomputed on restore.

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    Board, Color, Coordinate, MoveHistory, Piece, PieceId, PieceKind, RulesConfig, SnapshotError,
};

/// One serialized piece. Optional fields are present only on the kinds that
/// carry them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SavedPiece {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PieceKind,
    pub color: Color,
    pub x: i8,
    pub y: i8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub captured: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub has_moved: Option<bool>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub en_passant_destination: Option<Coordinate>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub just_double_advanced: Option<bool>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub king_castling_destination: Option<Coordinate>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub queen_castling_destination: Option<Coordinate>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub threatener_id: Option<PieceId>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub checked: Option<bool>,
}

impl SavedPiece {
    /// A bare piece with no kind-specific fields
    #[must_use]
    pub fn new(kind: PieceKind, color: Color, at: Coordinate) -> Self {
        SavedPiece {
            kind,
            color,
            x: at.x,
            y: at.y,
            captured: false,
            has_moved: None,
            en_passant_destination: None,
            just_double_advanced: None,
            king_castling_destination: None,
            queen_castling_destination: None,
            threatener_id: None,
            checked: None,
        }
    }

    /// First kind-specific field set on a kind that does not carry it
    fn foreign_field(&self) -> Option<&'static str> {
        let is_pawn = self.kind == PieceKind::Pawn;
        let is_king = self.kind == PieceKind::King;
        let checks: [(&'static str, bool, bool); 7] = [
            (
                "hasMoved",
                self.has_moved.is_some(),
                self.kind.tracks_first_move(),
            ),
            (
                "enPassantDestination",
                self.en_passant_destination.is_some(),
                is_pawn,
            ),
            (
                "justDoubleAdvanced",
                self.just_double_advanced.is_some(),
                is_pawn,
            ),
            (
                "kingCastlingDestination",
                self.king_castling_destination.is_some(),
                is_king,
            ),
            (
                "queenCastlingDestination",
                self.queen_castling_destination.is_some(),
                is_king,
            ),
            ("threatenerId", self.threatener_id.is_some(), is_king),
            ("checked", self.checked.is_some(), is_king),
        ];
        checks
            .into_iter()
            .find(|&(_, present, allowed)| present && !allowed)
            .map(|(field, _, _)| field)
    }
}

/// Everything needed to resume a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SavedGame {
    pub pieces: Vec<SavedPiece>,
    #[cfg_attr(feature = "serde", serde(rename = "moveLog", default))]
    pub history: MoveHistory,
    #[cfg_attr(feature = "serde", serde(rename = "currentTurn"))]
    pub side_to_move: Color,
}

impl Board {
    #[must_use]
    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            pieces: self.pieces.iter().map(|p| self.save_piece(p)).collect(),
            history: self.history.clone(),
            side_to_move: self.side_to_move,
        }
    }

    fn save_piece(&self, piece: &Piece) -> SavedPiece {
        let mut saved = SavedPiece::new(piece.kind, piece.color, piece.position);
        saved.captured = piece.captured;
        if piece.kind.tracks_first_move() {
            saved.has_moved = Some(piece.has_moved);
        }
        match piece.kind {
            PieceKind::Pawn => {
                saved.just_double_advanced = Some(piece.just_double_advanced);
                saved.en_passant_destination = self.en_passant(piece.id).map(|ep| ep.destination);
            }
            PieceKind::King => {
                let castles = self.castling(piece.id);
                saved.king_castling_destination = castles.kingside.map(|c| c.king_to);
                saved.queen_castling_destination = castles.queenside.map(|c| c.king_to);
                saved.checked = Some(piece.checked);
                saved.threatener_id = piece.threatener;
            }
            _ => {}
        }
        saved
    }

    /// Rebuild a board from a saved game with the default rules.
    pub fn restore(saved: &SavedGame) -> Result<Board, SnapshotError> {
        Board::restore_with_config(saved, RulesConfig::default())
    }

    /// Rebuild a board, validating the invariants every reachable position
    /// satisfies. Check state and the game outcome are recomputed.
    pub fn restore_with_config(
        saved: &SavedGame,
        config: RulesConfig,
    ) -> Result<Board, SnapshotError> {
        let count = saved.pieces.len();
        if count > usize::from(u8::MAX) + 1 {
            return Err(SnapshotError::TooManyPieces { count });
        }

        let mut board = Board::empty(config);
        let mut ordinals = [[0u8; 6]; 2];
        for (index, entry) in saved.pieces.iter().enumerate() {
            let at = Coordinate::new(entry.x, entry.y).ok_or(SnapshotError::InvalidCoordinate {
                x: entry.x,
                y: entry.y,
            })?;
            if let Some(field) = entry.foreign_field() {
                return Err(SnapshotError::CapabilityMismatch { index, field });
            }

            let ordinal = &mut ordinals[entry.color.index()][entry.kind.index()];
            *ordinal += 1;
            let id = PieceId(index as u8);
            let mut piece = Piece::new(id, entry.kind, entry.color, *ordinal, at);
            piece.captured = entry.captured;
            piece.has_moved = entry.has_moved.unwrap_or(false);
            piece.just_double_advanced = entry.just_double_advanced.unwrap_or(false);
            piece.checked = entry.checked.unwrap_or(false);
            piece.threatener = entry.threatener_id;

            if !piece.captured {
                if board.squares[at.index()].is_some() {
                    return Err(SnapshotError::SquareCollision {
                        notation: at.to_string(),
                    });
                }
                board.squares[at.index()] = Some(id);
            }
            board.pieces.push(piece);
        }

        for color in Color::BOTH {
            match board
                .pieces_of(color)
                .filter(|p| p.kind == PieceKind::King)
                .count()
            {
                0 => return Err(SnapshotError::MissingKing { color }),
                1 => {}
                _ => return Err(SnapshotError::DuplicateKing { color }),
            }
        }
        if let Some(id) = board
            .pieces
            .iter()
            .filter_map(|p| p.threatener)
            .find(|&id| board.piece(id).is_none())
        {
            return Err(SnapshotError::UnknownThreatener { id });
        }

        board.history = saved.history.clone();
        board.side_to_move = saved.side_to_move;

        let saved_checks: Vec<(bool, Option<PieceId>)> = Color::BOTH
            .iter()
            .filter_map(|&color| board.king(color).map(|k| (k.checked, k.threatener)))
            .collect();
        board.refresh_check_state();
        for (color, saved_check) in Color::BOTH.into_iter().zip(saved_checks) {
            let recomputed = board.king(color).map(|k| (k.checked, k.threatener));
            if recomputed != Some(saved_check) {
                warn!("saved check state of the {color} king disagrees with the position, using recomputed state");
            }
        }
        board.refresh_outcome();

        #[cfg(debug_assertions)]
        board.debug_validate();

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings_only() -> SavedGame {
        let mut white = SavedPiece::new(PieceKind::King, Color::White, Coordinate::at(5, 1));
        white.has_moved = Some(false);
        white.checked = Some(false);
        let mut black = SavedPiece::new(PieceKind::King, Color::Black, Coordinate::at(5, 8));
        black.has_moved = Some(false);
        black.checked = Some(false);
        SavedGame {
            pieces: vec![white, black],
            history: MoveHistory::new(),
            side_to_move: Color::White,
        }
    }

    #[test]
    fn test_start_position_round_trips() {
        let board = Board::new();
        let restored = Board::restore(&board.snapshot()).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_snapshot_fields_follow_kind() {
        let saved = Board::new().snapshot();
        let knight = &saved.pieces[1];
        assert_eq!(knight.kind, PieceKind::Knight);
        assert_eq!(knight.has_moved, None);
        let pawn = &saved.pieces[8];
        assert_eq!(pawn.just_double_advanced, Some(false));
        assert_eq!(pawn.checked, None);
        let king = &saved.pieces[4];
        assert_eq!(king.checked, Some(false));
        assert_eq!(king.king_castling_destination, None);
    }

    #[test]
    fn test_restore_rejects_missing_king() {
        let mut saved = kings_only();
        saved.pieces[1].captured = true;
        assert_eq!(
            Board::restore(&saved),
            Err(SnapshotError::MissingKing {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_restore_rejects_collision() {
        let mut saved = kings_only();
        saved
            .pieces
            .push(SavedPiece::new(PieceKind::Knight, Color::White, Coordinate::at(5, 8)));
        assert_eq!(
            Board::restore(&saved),
            Err(SnapshotError::SquareCollision {
                notation: "e8".to_string()
            })
        );
    }

    #[test]
    fn test_restore_rejects_off_board() {
        let mut saved = kings_only();
        saved.pieces[0].x = 0;
        assert_eq!(
            Board::restore(&saved),
            Err(SnapshotError::InvalidCoordinate { x: 0, y: 1 })
        );
    }

    #[test]
    fn test_restore_rejects_foreign_field() {
        let mut saved = kings_only();
        let mut bishop = SavedPiece::new(PieceKind::Bishop, Color::White, Coordinate::at(3, 1));
        bishop.has_moved = Some(true);
        saved.pieces.push(bishop);
        assert_eq!(
            Board::restore(&saved),
            Err(SnapshotError::CapabilityMismatch {
                index: 2,
                field: "hasMoved"
            })
        );
    }

    #[test]
    fn test_restore_rejects_dangling_threatener() {
        let mut saved = kings_only();
        saved.pieces[0].threatener_id = Some(PieceId(9));
        assert_eq!(
            Board::restore(&saved),
            Err(SnapshotError::UnknownThreatener { id: PieceId(9) })
        );
    }

    #[test]
    fn test_restore_recomputes_check() {
        let mut saved = kings_only();
        saved
            .pieces
            .push(SavedPiece::new(PieceKind::Rook, Color::Black, Coordinate::at(5, 5)));
        let board = Board::restore(&saved).unwrap();
        let king = board.king(Color::White).unwrap();
        assert!(king.is_checked());
        assert_eq!(king.threatener(), Some(PieceId(2)));
    }
}

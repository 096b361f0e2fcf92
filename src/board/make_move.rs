use log::{debug, info};

use super::{
    Board, Color, Coordinate, KingStatus, Maneuver, MoveError, MoveOutcome, MoveRecord, Piece,
    PieceId, PieceKind,
};

impl Board {
    /// Highlighted destinations for a drag. Empty when the piece is unknown,
    /// captured, not on move, or the game is over.
    #[must_use]
    pub fn on_drag_start(&self, id: PieceId) -> Vec<Coordinate> {
        match self.movable_piece(id) {
            Ok(_) => self.legal_destinations(id),
            Err(err) => {
                debug!("drag refused: {err}");
                Vec::new()
            }
        }
    }

    /// Apply a drop if `dest` is highlighted; otherwise nothing changes and
    /// the outcome reports `applied: false`.
    pub fn on_drop(&mut self, id: PieceId, dest: Coordinate) -> MoveOutcome {
        match self.try_move(id, dest) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("drop refused: {err}");
                self.outcome_for(None)
            }
        }
    }

    /// Like [`Board::on_drop`], with the reason for a refusal.
    pub fn try_move(&mut self, id: PieceId, dest: Coordinate) -> Result<MoveOutcome, MoveError> {
        self.movable_piece(id)?;
        if !self.legal_destinations(id).contains(&dest) {
            return Err(MoveError::IllegalDestination {
                id,
                notation: dest.to_string(),
            });
        }

        // Build the whole post-move state before anyone can observe it.
        let mut next = self.clone();
        let record = next.apply_move(id, dest);
        *self = next;

        Ok(self.outcome_for(Some(record)))
    }

    fn movable_piece(&self, id: PieceId) -> Result<&Piece, MoveError> {
        if self.config.enforce_game_over && self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        let piece = self
            .piece_record(id)
            .ok_or(MoveError::UnknownPiece { id })?;
        if piece.captured {
            return Err(MoveError::PieceCaptured { id });
        }
        if self.config.enforce_turn_order && piece.color != self.side_to_move {
            return Err(MoveError::NotYourTurn {
                id,
                side_to_move: self.side_to_move,
            });
        }
        Ok(piece)
    }

    /// Relocate, capture, castle, reset en passant flags, then re-evaluate
    /// check and checkmate. `dest` must already be legal.
    fn apply_move(&mut self, id: PieceId, dest: Coordinate) -> MoveRecord {
        let (kind, color, origin) = {
            let piece = &self.pieces[id.index()];
            (piece.kind, piece.color, piece.position)
        };

        let en_passant = match kind {
            PieceKind::Pawn => self.en_passant(id).filter(|ep| ep.destination == dest),
            _ => None,
        };
        let castle = match kind {
            PieceKind::King => self.castling(id).landing_on(dest),
            _ => None,
        };

        let mut maneuver = Maneuver::Quiet;
        let mut captured = None;
        if let Some(ep) = en_passant {
            self.capture(ep.captured);
            captured = Some(ep.captured);
            maneuver = Maneuver::EnPassant;
        } else if let Some(victim) = self.piece_at(dest).map(Piece::id) {
            self.capture(victim);
            captured = Some(victim);
            maneuver = Maneuver::Capture;
        }

        self.relocate(id, dest);
        if let Some(castle) = castle {
            self.relocate(castle.rook, castle.rook_to);
            maneuver = castle.side.maneuver();
        }

        let double_advanced = kind == PieceKind::Pawn && (dest.y - origin.y).abs() == 2;
        for piece in self.pieces.iter_mut().filter(|p| p.kind == PieceKind::Pawn) {
            piece.just_double_advanced = piece.id == id && double_advanced;
        }

        let record = MoveRecord {
            piece: id,
            kind,
            color,
            origin,
            destination: dest,
            maneuver,
            captured,
        };
        debug!("applied {record}");
        self.history.record(record);
        self.side_to_move = color.opponent();

        self.refresh_check_state();
        if let Some(threatener) = self.king(color.opponent()).and_then(Piece::threatener) {
            info!("{} king in check from {threatener}", color.opponent());
        }
        self.refresh_outcome();

        #[cfg(debug_assertions)]
        self.debug_validate();

        record
    }

    fn king_status(&self, color: Color) -> KingStatus {
        let checkmated = self
            .outcome
            .is_some_and(|outcome| outcome.winner() == color.opponent());
        self.king(color)
            .map(|king| KingStatus {
                checked: king.checked,
                threatener: king.threatener,
                checkmated,
            })
            .unwrap_or_default()
    }

    fn outcome_for(&self, record: Option<MoveRecord>) -> MoveOutcome {
        MoveOutcome {
            applied: record.is_some(),
            maneuver: record.map_or(Maneuver::Quiet, |r| r.maneuver),
            captured: record.and_then(|r| r.captured),
            white: self.king_status(Color::White),
            black: self.king_status(Color::Black),
            record,
        }
    }
}

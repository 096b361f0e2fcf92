//! Special moves: pawn double advance, en passant and castling.
//!
//! Everything here is a pure read of the board. Nothing is cached on the
//! pieces; the only persistent facts involved are `has_moved` and
//! `just_double_advanced`.

use super::{Board, CastlingSide, Coordinate, Piece, PieceId, PieceKind};

/// An available en passant capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnPassant {
    /// Where the capturing pawn lands
    pub destination: Coordinate,
    /// The pawn that just double-advanced beside the mover
    pub captured: PieceId,
}

/// An available castle for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Castle {
    pub side: CastlingSide,
    pub king_to: Coordinate,
    /// Square the king crosses on the way, where the rook ends up
    pub rook_to: Coordinate,
    pub rook: PieceId,
}

/// Castling availability for a king.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastlingOptions {
    pub kingside: Option<Castle>,
    pub queenside: Option<Castle>,
}

impl CastlingOptions {
    pub fn iter(&self) -> impl Iterator<Item = Castle> {
        self.kingside.into_iter().chain(self.queenside)
    }

    /// The castle whose king destination is `to`
    #[must_use]
    pub fn landing_on(&self, to: Coordinate) -> Option<Castle> {
        self.iter().find(|castle| castle.king_to == to)
    }
}

impl Board {
    /// Special-move candidates for a piece: double advance and en passant for
    /// pawns, castling for kings.
    #[must_use]
    pub fn special_movement(&self, id: PieceId) -> Vec<Coordinate> {
        let Some(piece) = self.piece(id) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Pawn => self
                .double_advance(id)
                .into_iter()
                .chain(self.en_passant(id).map(|ep| ep.destination))
                .collect(),
            PieceKind::King => self.castling(id).iter().map(|c| c.king_to).collect(),
            _ => Vec::new(),
        }
    }

    /// Two-square advance for an unmoved pawn with a clear path.
    #[must_use]
    pub fn double_advance(&self, id: PieceId) -> Option<Coordinate> {
        let pawn = self
            .piece(id)
            .filter(|p| p.kind == PieceKind::Pawn && !p.has_moved)?;
        let dir = pawn.color.pawn_direction();
        let single = pawn.position.offset(0, dir)?;
        let double = pawn.position.offset(0, 2 * dir)?;
        (!self.is_occupied(single) && !self.is_occupied(double)).then_some(double)
    }

    /// En passant against an enemy pawn beside this one that double-advanced
    /// on the previous ply.
    #[must_use]
    pub fn en_passant(&self, id: PieceId) -> Option<EnPassant> {
        let pawn = self.piece(id).filter(|p| p.kind == PieceKind::Pawn)?;
        let dir = pawn.color.pawn_direction();

        [-1, 1].into_iter().find_map(|dx| {
            let beside = pawn.position.offset(dx, 0)?;
            let victim = self.piece_at(beside).filter(|v| {
                v.kind == PieceKind::Pawn && v.color != pawn.color && v.just_double_advanced
            })?;
            let destination = beside.offset(0, dir)?;
            (!self.is_occupied(destination)).then_some(EnPassant {
                destination,
                captured: victim.id,
            })
        })
    }

    /// Castling by occupancy alone: unmoved king, unmoved rook of the same
    /// color on the corner, nothing in between. Attacked squares are the
    /// legality filter's concern.
    #[must_use]
    pub fn castling(&self, id: PieceId) -> CastlingOptions {
        let Some(king) = self
            .piece(id)
            .filter(|p| p.kind == PieceKind::King && !p.has_moved)
        else {
            return CastlingOptions::default();
        };
        CastlingOptions {
            kingside: self.castle_on(king, CastlingSide::Kingside),
            queenside: self.castle_on(king, CastlingSide::Queenside),
        }
    }

    fn castle_on(&self, king: &Piece, side: CastlingSide) -> Option<Castle> {
        let step = side.file_step();
        let distance = side.rook_distance();
        let from = king.position;

        let rook_square = from.offset(step * distance, 0)?;
        let rook = self.piece_at(rook_square).filter(|r| {
            r.kind == PieceKind::Rook && r.color == king.color && !r.has_moved
        })?;

        let path_clear = (1..distance)
            .filter_map(|n| from.offset(step * n, 0))
            .all(|sq| !self.is_occupied(sq));
        if !path_clear {
            return None;
        }

        Some(Castle {
            side,
            king_to: from.offset(step * 2, 0)?,
            rook_to: from.offset(step, 0)?,
            rook: rook.id,
        })
    }
}

//! Move records and outcomes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::piece::{Color, PieceId, PieceKind};

/// What kind of move was played, as fed to the move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Maneuver {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    Quiet,
    #[cfg_attr(feature = "serde", serde(rename = "capture"))]
    Capture,
    #[cfg_attr(feature = "serde", serde(rename = "en passant"))]
    EnPassant,
    #[cfg_attr(feature = "serde", serde(rename = "castling king"))]
    CastleKingside,
    #[cfg_attr(feature = "serde", serde(rename = "castling queen"))]
    CastleQueenside,
}

/// `Kingside` (toward file h) or `Queenside` (toward file a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    /// File step from king toward the rook
    #[inline]
    #[must_use]
    pub const fn file_step(self) -> i8 {
        match self {
            CastlingSide::Kingside => 1,
            CastlingSide::Queenside => -1,
        }
    }

    /// Distance from the king to its castling rook
    #[inline]
    #[must_use]
    pub const fn rook_distance(self) -> i8 {
        match self {
            CastlingSide::Kingside => 3,
            CastlingSide::Queenside => 4,
        }
    }

    #[inline]
    #[must_use]
    pub const fn maneuver(self) -> Maneuver {
        match self {
            CastlingSide::Kingside => Maneuver::CastleKingside,
            CastlingSide::Queenside => Maneuver::CastleQueenside,
        }
    }
}

/// One committed ply, as emitted to the move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MoveRecord {
    #[cfg_attr(feature = "serde", serde(rename = "pieceId"))]
    pub piece: PieceId,
    #[cfg_attr(feature = "serde", serde(rename = "pieceType"))]
    pub kind: PieceKind,
    pub color: Color,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub maneuver: Maneuver,
    pub captured: Option<PieceId>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.color, self.kind, self.origin, self.destination
        )
    }
}

/// How the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
}

impl GameOutcome {
    #[must_use]
    pub const fn winner(self) -> Color {
        match self {
            GameOutcome::Checkmate { winner } => winner,
        }
    }
}

/// Check state of one king, as reported to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct KingStatus {
    pub checked: bool,
    pub threatener: Option<PieceId>,
    pub checkmated: bool,
}

/// Result of a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// False when the drop was rejected and nothing changed
    pub applied: bool,
    pub maneuver: Maneuver,
    pub captured: Option<PieceId>,
    pub white: KingStatus,
    pub black: KingStatus,
    /// The move-log entry, present iff `applied`
    pub record: Option<MoveRecord>,
}

impl MoveOutcome {
    #[must_use]
    pub const fn king(&self, color: Color) -> KingStatus {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

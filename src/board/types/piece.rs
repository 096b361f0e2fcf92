//! Piece, color and identity types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coordinate::{Coordinate, Direction, BOARD_SIZE};

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Returns true if this piece is a slider (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Pieces whose first move changes what they may do later (Pawn, Rook, King)
    #[inline]
    #[must_use]
    pub const fn tracks_first_move(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Rook | PieceKind::King)
    }

    /// Sliding directions for sliders and the king; empty for pawns and knights.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            PieceKind::Rook => &Direction::ORTHOGONAL,
            PieceKind::Bishop => &Direction::DIAGONAL,
            PieceKind::Queen | PieceKind::King => &Direction::ALL,
            PieceKind::Pawn | PieceKind::Knight => &[],
        }
    }

    /// Returns true if a slider of this kind moves along `dir`
    #[inline]
    #[must_use]
    pub fn slides_along(self, dir: Direction) -> bool {
        self.is_slider() && self.directions().contains(&dir)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (1 for White, 8 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => BOARD_SIZE,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (2 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable piece identity: the arena index assigned at setup. Never reused,
/// captured pieces keep theirs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PieceId(pub u8);

impl PieceId {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece and the facts about it that persist across turns.
///
/// Kind-specific state lives in flags rather than in separate types:
/// `has_moved` matters for pawns, rooks and kings, `just_double_advanced`
/// for pawns, `checked` and `threatener` for kings. The flags stay false /
/// `None` on every other kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) kind: PieceKind,
    pub(crate) color: Color,
    pub(crate) ordinal: u8,
    pub(crate) position: Coordinate,
    pub(crate) captured: bool,
    pub(crate) has_moved: bool,
    pub(crate) just_double_advanced: bool,
    pub(crate) checked: bool,
    pub(crate) threatener: Option<PieceId>,
}

impl Piece {
    pub(crate) fn new(
        id: PieceId,
        kind: PieceKind,
        color: Color,
        ordinal: u8,
        position: Coordinate,
    ) -> Self {
        Piece {
            id,
            kind,
            color,
            ordinal,
            position,
            captured: false,
            has_moved: false,
            just_double_advanced: false,
            checked: false,
            threatener: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    #[inline]
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    #[inline]
    #[must_use]
    pub fn just_double_advanced(&self) -> bool {
        self.just_double_advanced
    }

    /// Whether this king is in check (always false for other kinds)
    #[inline]
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// The enemy piece delivering check to this king
    #[inline]
    #[must_use]
    pub fn threatener(&self) -> Option<PieceId> {
        self.threatener
    }

    /// `kind-color-n`, where `n` counts pieces of the same kind and color in
    /// setup order, e.g. `pawn-white-3`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}-{}", self.kind, self.color, self.ordinal)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.label(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_capability() {
        assert!(PieceKind::Pawn.tracks_first_move());
        assert!(PieceKind::Rook.tracks_first_move());
        assert!(PieceKind::King.tracks_first_move());
        assert!(!PieceKind::Knight.tracks_first_move());
        assert!(!PieceKind::Queen.tracks_first_move());
    }

    #[test]
    fn test_slides_along() {
        assert!(PieceKind::Rook.slides_along(Direction::North));
        assert!(!PieceKind::Rook.slides_along(Direction::NorthEast));
        assert!(PieceKind::Bishop.slides_along(Direction::SouthWest));
        assert!(PieceKind::Queen.slides_along(Direction::West));
        assert!(!PieceKind::King.slides_along(Direction::West));
    }

    #[test]
    fn test_label() {
        let piece = Piece::new(
            PieceId(10),
            PieceKind::Pawn,
            Color::White,
            3,
            Coordinate::at(3, 2),
        );
        assert_eq!(piece.label(), "pawn-white-3");
        assert_eq!(piece.to_string(), "pawn-white-3 on c2");
    }

    #[test]
    fn test_pawn_directions_meet() {
        assert_eq!(
            Color::White.pawn_direction(),
            -Color::Black.pawn_direction()
        );
        assert_eq!(
            Color::White.pawn_start_rank() + Color::White.pawn_direction() * 5,
            Color::Black.pawn_start_rank()
        );
    }
}

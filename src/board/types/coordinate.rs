//! Coordinate and direction types.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordinateError;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the board, 1-indexed: `x` is the file (1 = a) and `y` the
/// rank (1 = White's back rank).
///
/// The fields are public so callers can describe arbitrary pointer targets;
/// use [`Coordinate::is_valid`] before trusting one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub x: i8,
    pub y: i8,
}

impl Coordinate {
    /// Create a coordinate with bounds checking
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Option<Self> {
        let c = Coordinate { x, y };
        if c.is_valid() {
            Some(c)
        } else {
            None
        }
    }

    /// Create a coordinate without bounds checking
    #[inline]
    #[must_use]
    pub const fn at(x: i8, y: i8) -> Self {
        Coordinate { x, y }
    }

    /// True iff both axes lie in `1..=BOARD_SIZE`
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.x >= 1 && self.x <= BOARD_SIZE && self.y >= 1 && self.y <= BOARD_SIZE
    }

    /// Step by a delta, discarding off-board results
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// Step one square toward `dir`
    #[inline]
    #[must_use]
    pub const fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// Index 0-63 (a1=0, b1=1, ..., h8=63). Only meaningful for valid coordinates.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        ((self.y - 1) * BOARD_SIZE + (self.x - 1)) as usize
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Coordinate {
            x: (idx % 8) as i8 + 1,
            y: (idx / 8) as i8 + 1,
        }
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..64).map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", (b'a' + (self.x - 1) as u8) as char, self.y)
        } else {
            write!(f, "[{}/{}]", self.x, self.y)
        }
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl TryFrom<(i8, i8)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((x, y): (i8, i8)) -> Result<Self, Self::Error> {
        Coordinate::new(x, y).ok_or(CoordinateError::OutOfBounds { x, y })
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoordinateError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let x = match bytes[0].to_ascii_lowercase() {
            f @ b'a'..=b'h' => (f - b'a') as i8 + 1,
            _ => return Err(invalid()),
        };
        let y = match bytes[1] {
            r @ b'1'..=b'8' => (r - b'0') as i8,
            _ => return Err(invalid()),
        };

        Ok(Coordinate { x, y })
    }
}

/// The eight compass directions. North is toward increasing `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in scan order
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Rook directions
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Bishop directions
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// `(dx, dy)` of a single step
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Compass direction from `from` to `to`, if `to` lies on one of the
    /// eight axes through `from`.
    #[must_use]
    pub fn between(from: Coordinate, to: Coordinate) -> Option<Direction> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if (dx, dy) == (0, 0) || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
            return None;
        }
        let step = (dx.signum(), dy.signum());
        Direction::ALL.into_iter().find(|dir| dir.delta() == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_bounds() {
        assert!(Coordinate::at(1, 1).is_valid());
        assert!(Coordinate::at(8, 8).is_valid());
        assert!(!Coordinate::at(0, 4).is_valid());
        assert!(!Coordinate::at(4, 9).is_valid());
        assert_eq!(Coordinate::new(9, 1), None);
    }

    #[test]
    fn test_offset_discards_off_board() {
        let corner = Coordinate::at(8, 8);
        assert_eq!(corner.offset(1, 0), None);
        assert_eq!(corner.offset(-1, -1), Some(Coordinate::at(7, 7)));
        assert_eq!(corner.step(Direction::North), None);
    }

    #[test]
    fn test_notation() {
        let e4: Coordinate = "e4".parse().unwrap();
        assert_eq!(e4, Coordinate::at(5, 4));
        assert_eq!(e4.to_string(), "e4");
        assert!("i1".parse::<Coordinate>().is_err());
        assert!("a9".parse::<Coordinate>().is_err());
        assert!("e".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(Coordinate::try_from((3, 6)), Ok(Coordinate::at(3, 6)));
        assert_eq!(
            Coordinate::try_from((0, 6)),
            Err(CoordinateError::OutOfBounds { x: 0, y: 6 })
        );
    }

    #[test]
    fn test_index_round_trip() {
        for sq in Coordinate::all() {
            assert_eq!(Coordinate::from_index(sq.index()), sq);
        }
        assert_eq!(Coordinate::all().count(), 64);
    }

    #[test]
    fn test_direction_between() {
        let origin = Coordinate::at(4, 4);
        assert_eq!(
            Direction::between(origin, Coordinate::at(4, 8)),
            Some(Direction::North)
        );
        assert_eq!(
            Direction::between(origin, Coordinate::at(1, 1)),
            Some(Direction::SouthWest)
        );
        assert_eq!(Direction::between(origin, Coordinate::at(5, 6)), None);
        assert_eq!(Direction::between(origin, origin), None);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
        }
    }
}

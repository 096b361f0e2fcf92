//! Error types for board operations.

use std::fmt;

use super::{Color, PieceId};

/// Error type for coordinate construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Coordinate lies outside the 1..=8 grid
    OutOfBounds { x: i8, y: i8 },
    /// Invalid algebraic notation (expected e.g. "e4")
    InvalidNotation { notation: String },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::OutOfBounds { x, y } => {
                write!(f, "Coordinate {x}/{y} out of bounds (must be 1-8)")
            }
            CoordinateError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// Reason a drag or drop was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece with this id was ever placed on the board
    UnknownPiece { id: PieceId },
    /// The piece has already been captured
    PieceCaptured { id: PieceId },
    /// The piece belongs to the side that is not on move
    NotYourTurn { id: PieceId, side_to_move: Color },
    /// Checkmate has been declared and game over is enforced
    GameOver,
    /// The destination is not among the piece's highlighted squares
    IllegalDestination { id: PieceId, notation: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::UnknownPiece { id } => write!(f, "No piece with id {id}"),
            MoveError::PieceCaptured { id } => write!(f, "Piece {id} has been captured"),
            MoveError::NotYourTurn { id, side_to_move } => {
                write!(f, "Piece {id} cannot move, it is {side_to_move}'s turn")
            }
            MoveError::GameOver => write!(f, "The game is over"),
            MoveError::IllegalDestination { id, notation } => {
                write!(f, "Piece {id} cannot move to {notation}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for restoring a saved game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// No live king of this color
    MissingKing { color: Color },
    /// More than one live king of this color
    DuplicateKing { color: Color },
    /// Two live pieces on one square
    SquareCollision { notation: String },
    /// A piece stands outside the board
    InvalidCoordinate { x: i8, y: i8 },
    /// A king names a threatener that does not exist
    UnknownThreatener { id: PieceId },
    /// A field was set on a piece kind that does not carry it
    CapabilityMismatch { index: usize, field: &'static str },
    /// More pieces than the id space can address
    TooManyPieces { count: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::MissingKing { color } => write!(f, "No {color} king on the board"),
            SnapshotError::DuplicateKing { color } => {
                write!(f, "More than one {color} king on the board")
            }
            SnapshotError::SquareCollision { notation } => {
                write!(f, "Two pieces occupy {notation}")
            }
            SnapshotError::InvalidCoordinate { x, y } => {
                write!(f, "Piece placed off the board at {x}/{y}")
            }
            SnapshotError::UnknownThreatener { id } => {
                write!(f, "Threatener {id} does not exist")
            }
            SnapshotError::CapabilityMismatch { index, field } => {
                write!(f, "Piece at index {index} cannot carry '{field}'")
            }
            SnapshotError::TooManyPieces { count } => {
                write!(f, "Too many pieces ({count}), at most 256 are supported")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

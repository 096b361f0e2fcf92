//! Core board types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Coordinate` and `Direction` - 1-indexed squares and compass steps
//! - `Piece`, `PieceKind`, `PieceId` and `Color` - the piece arena records
//! - `MoveRecord`, `MoveOutcome`, `Maneuver` - what a drop produced

mod coordinate;
mod moves;
mod piece;

pub use coordinate::{Coordinate, Direction, BOARD_SIZE};
pub use moves::{CastlingSide, GameOutcome, KingStatus, Maneuver, MoveOutcome, MoveRecord};
pub use piece::{Color, Piece, PieceId, PieceKind};

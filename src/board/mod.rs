//! Chess rules for a drag-and-drop board.
//!
//! Pieces live in an id-indexed arena with a square index beside it. Every
//! query is a pure read; only [`Board::on_drop`] and [`Board::try_move`]
//! change the position.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Coordinate};
//!
//! let mut board = Board::new();
//! let pawn = board.piece_at(Coordinate::at(5, 2)).unwrap().id();
//! let highlights = board.on_drag_start(pawn);
//! assert_eq!(highlights.len(), 2);
//!
//! let outcome = board.on_drop(pawn, Coordinate::at(5, 4));
//! assert!(outcome.applied);
//! ```

mod builder;
mod config;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod history;
mod legality;
mod make_move;
mod movegen;
pub mod prelude;
mod query;
mod rays;
mod snapshot;
mod special;
mod state;
mod threats;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use config::RulesConfig;
pub use error::{CoordinateError, MoveError, SnapshotError};
pub use history::{MoveHistory, TurnEntry};
pub use snapshot::{SavedGame, SavedPiece};
pub use state::Board;
pub use types::{
    CastlingSide, Color, Coordinate, Direction, GameOutcome, KingStatus, Maneuver, MoveOutcome,
    MoveRecord, Piece, PieceId, PieceKind, BOARD_SIZE,
};

// Lower-level analysis for callers that want more than highlights
pub use movegen::ScanMode;
pub use special::{Castle, CastlingOptions, EnPassant};
pub use threats::Threat;

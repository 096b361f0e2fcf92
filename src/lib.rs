pub mod board;
pub mod playout;
pub mod sync;

pub use board::{Board, Color, Coordinate, MoveOutcome, Piece, PieceId, PieceKind};
pub use sync::SharedBoard;

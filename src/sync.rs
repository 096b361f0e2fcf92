//! Shared board for a renderer and an input handler on different threads.
//!
//! Readers always see a fully applied position: a drop builds the next state
//! aside and swaps it in while holding the write lock.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::board::{Board, Coordinate, MoveOutcome, PieceId, SavedGame};

/// A thread-safe handle to one game.
#[derive(Clone, Debug, Default)]
pub struct SharedBoard(Arc<RwLock<Board>>);

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard(Arc::new(RwLock::new(board)))
    }

    /// Read access for rendering. Hold the guard briefly; drops wait on it.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, Board> {
        self.0.read()
    }

    #[must_use]
    pub fn on_drag_start(&self, id: PieceId) -> Vec<Coordinate> {
        self.0.read().on_drag_start(id)
    }

    pub fn on_drop(&self, id: PieceId, dest: Coordinate) -> MoveOutcome {
        self.0.write().on_drop(id, dest)
    }

    #[must_use]
    pub fn snapshot(&self) -> SavedGame {
        self.0.read().snapshot()
    }

    /// Replace the game, e.g. after loading a saved one.
    pub fn replace(&self, board: Board) {
        *self.0.write() = board;
    }
}

impl From<Board> for SharedBoard {
    fn from(board: Board) -> Self {
        SharedBoard::new(board)
    }
}

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, MoveRecord};

/// One numbered turn: White's ply and Black's reply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnEntry {
    pub white: Option<MoveRecord>,
    pub black: Option<MoveRecord>,
}

impl TurnEntry {
    fn slot(&self, color: Color) -> Option<MoveRecord> {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

/// Turn-indexed move log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveHistory {
    turns: Vec<TurnEntry>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        MoveHistory { turns: Vec::new() }
    }

    /// Append a ply. White opens a new turn; Black fills the current one.
    /// A second ply by the same color (free play) opens a new turn.
    pub(crate) fn record(&mut self, record: MoveRecord) {
        let needs_new_turn = match (self.turns.last(), record.color) {
            (None, _) => true,
            (Some(_), Color::White) => true,
            (Some(last), Color::Black) => last.black.is_some(),
        };
        if needs_new_turn {
            self.turns.push(TurnEntry::default());
        }
        if let Some(entry) = self.turns.last_mut() {
            match record.color {
                Color::White => entry.white = Some(record),
                Color::Black => entry.black = Some(record),
            }
        }
    }

    #[must_use]
    pub fn turns(&self) -> &[TurnEntry] {
        &self.turns
    }

    /// Plies in the order they were played
    pub fn plies(&self) -> impl Iterator<Item = MoveRecord> + '_ {
        self.turns
            .iter()
            .flat_map(|turn| [turn.slot(Color::White), turn.slot(Color::Black)])
            .flatten()
    }

    #[must_use]
    pub fn last(&self) -> Option<MoveRecord> {
        self.turns
            .last()
            .and_then(|turn| turn.black.or(turn.white))
    }

    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.plies().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

//! Linear move history with a cursor.

use super::error::MoveError;
use super::moves::Move;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots plus the index currently on display.
///
/// Always holds at least the start snapshot, and `cursor < len()`.
/// Recording a move drops everything after the cursor first, so there is
/// never more than one future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    moves: Vec<Move>,
    cursor: usize,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    moves: Vec<Move>,
    cursor: usize,
}

impl TryFrom<RawHistory> for History {
    type Error = MoveError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.cursor >= raw.moves.len() {
            return Err(MoveError::OutOfRange {
                index: raw.cursor,
                len: raw.moves.len(),
            });
        }
        Ok(Self {
            moves: raw.moves,
            cursor: raw.cursor,
        })
    }
}

impl History {
    /// History holding only the start snapshot.
    pub fn new() -> Self {
        Self {
            moves: vec![Move::start()],
            cursor: 0,
        }
    }

    /// Number of snapshots, including the start.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Never true: the start snapshot is always present.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Index of the snapshot on display.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the last snapshot.
    pub fn last_index(&self) -> usize {
        self.moves.len() - 1
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &Move {
        &self.moves[self.cursor]
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// All snapshots, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Drops every snapshot after the cursor, appends `mv`, and moves the cursor onto it.
    #[instrument(skip(self, mv), fields(cursor = self.cursor, len = self.moves.len()))]
    pub fn record(&mut self, mv: Move) {
        let discarded = self.moves.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding moves after cursor");
        }
        self.moves.truncate(self.cursor + 1);
        self.moves.push(mv);
        self.cursor = self.moves.len() - 1;
    }

    /// Moves the cursor to `index`.
    pub fn seek(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.moves.len() {
            return Err(MoveError::OutOfRange {
                index,
                len: self.moves.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Moves the cursor one step back.
    pub fn step_back(&mut self) -> Result<(), MoveError> {
        self.cursor = self.cursor.checked_sub(1).ok_or(MoveError::NothingToUndo)?;
        Ok(())
    }

    /// Moves the cursor one step forward.
    pub fn step_forward(&mut self) -> Result<(), MoveError> {
        if self.cursor >= self.last_index() {
            return Err(MoveError::NothingToRedo);
        }
        self.cursor += 1;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

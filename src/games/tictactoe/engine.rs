//! Game engine: history navigation and move application.

use super::error::MoveError;
use super::history::History;
use super::moves::{Move, MoveLabel};
use super::position::Position;
use super::rules::{WinningLine, winning_line};
use super::status::GameStatus;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Order of the move list. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Tic-tac-toe engine with a navigable history.
///
/// The board on display is always the snapshot at the history cursor, and the
/// player to move follows the cursor's parity (X on even indices). Invalid
/// requests leave state untouched: the plain operations report `false`, the
/// `try_*` operations say why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    history: History,
    sort_order: SortOrder,
}

impl GameEngine {
    /// Creates a new game at the start snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: History::new(),
            sort_order,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutations
    // ─────────────────────────────────────────────────────────────

    /// Marks `cell` for the player to move, discarding any redo future.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidCell`] for an index past 8, [`MoveError::GameOver`]
    /// when the current board has a line, [`MoveError::SquareOccupied`] when
    /// the cell is taken.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn try_play(&mut self, cell: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::InvalidCell(cell))?;
        let board = self.current_board();

        if winning_line(board).is_some() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let next = Move::new(board.with_mark(pos, player), pos);
        self.history.record(next);
        debug!(%player, position = %pos, cursor = self.history.cursor(), "Move recorded");
        Ok(())
    }

    /// [`try_play`](Self::try_play), ignoring rejections. Returns whether a move was made.
    pub fn play(&mut self, cell: usize) -> bool {
        Self::swallow(self.try_play(cell))
    }

    /// Shows the snapshot at `target`. History is unchanged.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] if `target` is past the end.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn try_jump_to(&mut self, target: usize) -> Result<(), MoveError> {
        self.history.seek(target)
    }

    /// [`try_jump_to`](Self::try_jump_to), ignoring rejections. Returns whether the cursor moved.
    pub fn jump_to(&mut self, target: usize) -> bool {
        let before = self.cursor();
        Self::swallow(self.try_jump_to(target)) && self.cursor() != before
    }

    /// Steps the cursor back one snapshot.
    ///
    /// # Errors
    ///
    /// [`MoveError::NothingToUndo`] at the start.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn try_undo(&mut self) -> Result<(), MoveError> {
        self.history.step_back()
    }

    /// [`try_undo`](Self::try_undo), ignoring rejections.
    pub fn undo(&mut self) -> bool {
        Self::swallow(self.try_undo())
    }

    /// Steps the cursor forward one snapshot.
    ///
    /// # Errors
    ///
    /// [`MoveError::NothingToRedo`] at the end.
    #[instrument(skip(self), fields(cursor = self.history.cursor()))]
    pub fn try_redo(&mut self) -> Result<(), MoveError> {
        self.history.step_forward()
    }

    /// [`try_redo`](Self::try_redo), ignoring rejections.
    pub fn redo(&mut self) -> bool {
        Self::swallow(self.try_redo())
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(sort_order = ?self.sort_order))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
    }

    fn swallow(result: Result<(), MoveError>) -> bool {
        match result {
            Ok(()) => true,
            Err(error) => {
                debug!(%error, "Ignoring rejected request");
                false
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of snapshots, including the start.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the snapshot on display.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Snapshot on display.
    pub fn current_move(&self) -> &Move {
        self.history.current()
    }

    /// Board on display.
    pub fn current_board(&self) -> &Board {
        self.history.current().board()
    }

    /// All snapshots, oldest first.
    pub fn moves(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.history.moves().iter()
    }

    /// Player to move at the cursor.
    pub fn next_player(&self) -> Player {
        Player::for_ply(self.history.cursor())
    }

    /// Move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Whether [`undo`](Self::undo) would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.history.cursor() > 0
    }

    /// Whether [`redo`](Self::redo) would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.history.cursor() < self.history.last_index()
    }

    /// Completed line on the current board.
    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(self.current_board())
    }

    /// Status of the current board.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.next_player())
    }

    /// Empty squares on the current board; none once it is won.
    pub fn valid_positions(&self) -> Vec<Position> {
        if self.winning_line().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// Label for the snapshot at `number`.
    pub fn move_label(&self, number: usize) -> Option<MoveLabel> {
        self.history.get(number).map(|mv| mv.label(number))
    }

    /// `(history index, snapshot)` pairs in move-list order.
    pub fn ordered_moves(&self) -> Vec<(usize, &Move)> {
        let indexed = self.history.moves().iter().enumerate();
        match self.sort_order {
            SortOrder::Ascending => indexed.collect(),
            SortOrder::Descending => indexed.rev().collect(),
        }
    }
}

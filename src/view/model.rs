//! Renderable snapshot of a game.

use crate::games::tictactoe::{GameEngine, Position, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One board cell as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// "X", "O", or empty.
    pub label: String,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// One move-list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index to jump to when clicked.
    pub target: usize,
    /// Row text, e.g. "Move 3: X at (1, 2)".
    pub label: String,
    /// The row for the snapshot on display; rendered as text, not a button.
    pub current: bool,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Row-major cells.
    pub cells: Vec<CellView>,
    /// Status line.
    pub status: String,
    /// Indices of the completed line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Order of `moves`.
    pub sort_order: SortOrder,
    /// History index on display.
    pub cursor: usize,
    /// Undo control enabled.
    pub can_undo: bool,
    /// Redo control enabled.
    pub can_redo: bool,
}

impl GameView {
    /// Builds the view for the engine's current state.
    #[instrument(skip(engine), fields(cursor = engine.cursor(), len = engine.history_len()))]
    pub fn from_engine(engine: &GameEngine) -> Self {
        let board = engine.current_board();
        let line = engine.winning_line();

        let cells = Position::ALL
            .iter()
            .map(|&pos| CellView {
                label: board.get(pos).label().to_string(),
                highlighted: line.is_some_and(|l| l.contains(pos)),
            })
            .collect();

        let moves = engine
            .ordered_moves()
            .into_iter()
            .map(|(target, mv)| MoveEntry {
                target,
                label: mv.label(target).to_string(),
                current: target == engine.cursor(),
            })
            .collect();

        Self {
            cells,
            status: engine.status().to_string(),
            winning_line: line.map(|l| l.indices()),
            moves,
            sort_order: engine.sort_order(),
            cursor: engine.cursor(),
            can_undo: engine.can_undo(),
            can_redo: engine.can_redo(),
        }
    }

    /// Entry marked current.
    pub fn current_entry(&self) -> Option<&MoveEntry> {
        self.moves.iter().find(|entry| entry.current)
    }
}

impl std::fmt::Display for GameView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.status)?;
        writeln!(f)?;
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let line: Vec<String> = cells
                .iter()
                .map(|cell| {
                    let mark = if cell.label.is_empty() { "." } else { cell.label.as_str() };
                    if cell.highlighted {
                        format!("[{}]", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Moves ({}):", self.sort_order.label())?;
        for entry in &self.moves {
            let marker = if entry.current { '>' } else { ' ' };
            writeln!(f, "{} {}", marker, entry.label)?;
        }
        Ok(())
    }
}

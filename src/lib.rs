//! Tic-tac-toe with a navigable move history.
//!
//! # Architecture
//!
//! - **Games**: board, rules, and the [`GameEngine`] holding a linear history
//!   of board snapshots with a cursor (jump, undo, redo, sort order)
//! - **View**: [`ViewAdapter`] turns engine state into a [`GameView`] and
//!   user [`Intent`]s into engine calls
//! - **TUI**: ratatui front end driven by the adapter
//! - **Replay**: headless sessions for scripting and tests
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameEngine, Intent, ViewAdapter};
//!
//! let mut adapter = ViewAdapter::new(GameEngine::new());
//! for cell in [0, 4, 1, 5, 2] {
//!     adapter.dispatch(Intent::Play(cell)).unwrap();
//! }
//! assert_eq!(adapter.view().status, "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod replay;
mod settings;
mod tui;
mod view;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameEngine, GameStatus, History, Move, MoveError, MoveLabel, Player, Position,
    SortOrder, Square, WinningLine,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::{check_winner, is_draw, is_full, winning_line};

// Crate-level exports - View adapter
pub use view::{
    CellView, GameView, Intent, InvalidIntentPolicy, MoveEntry, TracingObserver, ViewAdapter,
    ViewObserver,
};

// Crate-level exports - Settings
pub use settings::{Settings, SettingsError};

// Crate-level exports - Front ends
pub use replay::{replay, run_intents};
pub use tui::{App, Focus, run_tui};

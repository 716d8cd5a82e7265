//! Tic-tac-toe: board, rules, and the history-navigating engine.

mod engine;
mod error;
mod history;
mod moves;
mod position;
pub mod rules;
mod status;
pub mod types;

pub use engine::{GameEngine, SortOrder};
pub use error::MoveError;
pub use history::History;
pub use moves::{Move, MoveLabel};
pub use position::Position;
pub use rules::WinningLine;
pub use status::GameStatus;
pub use types::{Board, Player, Square};

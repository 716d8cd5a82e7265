//! Application state and key handling.

use crate::games::tictactoe::{GameEngine, Position};
use crate::settings::Settings;
use crate::view::{GameView, Intent, TracingObserver, ViewAdapter};
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    MoveList,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    adapter: ViewAdapter,
    board_cursor: Position,
    focus: Focus,
    list_selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application from session settings.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        let engine = GameEngine::with_sort_order(*settings.sort_order());
        let mut adapter = ViewAdapter::with_policy(engine, *settings.invalid_intents());
        adapter.subscribe(TracingObserver);
        Self {
            adapter,
            board_cursor: Position::Center,
            focus: Focus::Board,
            list_selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// The view to draw.
    pub fn view(&self) -> GameView {
        self.adapter.view()
    }

    /// Board cell under the keyboard cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list row.
    pub fn list_selected(&self) -> usize {
        self.list_selected
    }

    /// Message from the last rejected intent.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.message = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => {
                        self.select_current_entry();
                        Focus::MoveList
                    }
                    Focus::MoveList => Focus::Board,
                };
            }
            KeyCode::Char('u') => self.send(Intent::Undo),
            KeyCode::Char('r') => self.send(Intent::Redo),
            KeyCode::Char('s') => {
                self.send(Intent::ToggleSort);
                self.select_current_entry();
            }
            key if digit_position(key).is_some() => {
                if let Some(pos) = digit_position(key) {
                    self.board_cursor = pos;
                    self.send(Intent::Play(pos.to_index()));
                }
            }
            key => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::MoveList => self.handle_list_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.send(Intent::Play(self.board_cursor.to_index()));
            }
            key => self.board_cursor = move_cursor(self.board_cursor, key),
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) {
        let len = self.adapter.engine().history_len();
        match key {
            KeyCode::Up => self.list_selected = self.list_selected.saturating_sub(1),
            KeyCode::Down => self.list_selected = (self.list_selected + 1).min(len - 1),
            KeyCode::Enter => {
                let target = self
                    .view()
                    .moves
                    .get(self.list_selected)
                    .map(|entry| entry.target);
                if let Some(target) = target {
                    self.send(Intent::JumpTo(target));
                }
            }
            _ => {}
        }
    }

    fn send(&mut self, intent: Intent) {
        if let Err(error) = self.adapter.dispatch(intent) {
            self.message = Some(error.to_string());
        }
        let len = self.adapter.engine().history_len();
        self.list_selected = self.list_selected.min(len - 1);
    }

    fn select_current_entry(&mut self) {
        if let Some(row) = self.view().moves.iter().position(|entry| entry.current) {
            self.list_selected = row;
        }
    }
}

//! Intent dispatch between a renderer and the engine.

use super::model::GameView;
use crate::games::tictactoe::{GameEngine, MoveError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A user action forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Cell clicked (index 0-8).
    Play(usize),
    /// Move-list entry clicked (history index).
    JumpTo(usize),
    /// Undo button.
    Undo,
    /// Redo button.
    Redo,
    /// Sort checkbox.
    ToggleSort,
}

/// What dispatch does with a request the engine refuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidIntentPolicy {
    /// Leave state untouched and report no change.
    #[default]
    Ignore,
    /// Return the engine's [`MoveError`].
    Reject,
}

/// Receives the fresh view after every state-changing intent.
pub trait ViewObserver {
    /// Called once per successful mutation.
    fn on_update(&mut self, view: &GameView);
}

impl<F> ViewObserver for F
where
    F: FnMut(&GameView),
{
    fn on_update(&mut self, view: &GameView) {
        self(view)
    }
}

/// Logs the status line after each update.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl ViewObserver for TracingObserver {
    fn on_update(&mut self, view: &GameView) {
        info!(status = %view.status, cursor = view.cursor, moves = view.moves.len(), "View updated");
    }
}

/// Owns the engine for one session and translates intents into engine calls.
pub struct ViewAdapter {
    engine: GameEngine,
    policy: InvalidIntentPolicy,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl ViewAdapter {
    /// Wraps `engine`, ignoring invalid intents.
    #[instrument(skip(engine))]
    pub fn new(engine: GameEngine) -> Self {
        Self::with_policy(engine, InvalidIntentPolicy::default())
    }

    /// Wraps `engine` with an explicit invalid-intent policy.
    #[instrument(skip(engine))]
    pub fn with_policy(engine: GameEngine, policy: InvalidIntentPolicy) -> Self {
        Self {
            engine,
            policy,
            observers: Vec::new(),
        }
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: impl ViewObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The view for the current state.
    pub fn view(&self) -> GameView {
        GameView::from_engine(&self.engine)
    }

    /// Applies `intent`. Returns whether state changed; observers are notified only then.
    ///
    /// # Errors
    ///
    /// Under [`InvalidIntentPolicy::Reject`], the engine's refusal.
    #[instrument(skip(self), fields(cursor = self.engine.cursor()))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<bool, MoveError> {
        let before = self.engine.cursor();
        let result = match intent {
            Intent::Play(cell) => self.engine.try_play(cell).map(|()| true),
            Intent::JumpTo(target) => self
                .engine
                .try_jump_to(target)
                .map(|()| self.engine.cursor() != before),
            Intent::Undo => self.engine.try_undo().map(|()| true),
            Intent::Redo => self.engine.try_redo().map(|()| true),
            Intent::ToggleSort => {
                self.engine.toggle_sort();
                Ok(true)
            }
        };

        let changed = match (result, self.policy) {
            (Ok(changed), _) => changed,
            (Err(error), InvalidIntentPolicy::Ignore) => {
                debug!(%error, "Ignoring invalid intent");
                false
            }
            (Err(error), InvalidIntentPolicy::Reject) => {
                debug!(%error, "Rejecting invalid intent");
                return Err(error);
            }
        };

        if changed {
            self.notify();
        }
        Ok(changed)
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.view();
        for observer in &mut self.observers {
            observer.on_update(&view);
        }
    }
}

impl Default for ViewAdapter {
    fn default() -> Self {
        Self::new(GameEngine::new())
    }
}

impl std::fmt::Debug for ViewAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewAdapter")
            .field("engine", &self.engine)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_ignore_policy_swallows_errors() {
        let mut adapter = ViewAdapter::default();
        assert_eq!(adapter.dispatch(Intent::Undo), Ok(false));
        assert_eq!(adapter.dispatch(Intent::Play(12)), Ok(false));
        assert_eq!(adapter.dispatch(Intent::JumpTo(3)), Ok(false));
    }

    #[test]
    fn test_reject_policy_surfaces_errors() {
        let mut adapter =
            ViewAdapter::with_policy(GameEngine::new(), InvalidIntentPolicy::Reject);
        assert_eq!(adapter.dispatch(Intent::Redo), Err(MoveError::NothingToRedo));
        assert_eq!(adapter.dispatch(Intent::Play(4)), Ok(true));
        assert!(matches!(
            adapter.dispatch(Intent::Play(4)),
            Err(MoveError::SquareOccupied(_))
        ));
    }

    #[test]
    fn test_observers_fire_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut adapter = ViewAdapter::default();
        let sink = Rc::clone(&seen);
        adapter.subscribe(move |view: &GameView| sink.borrow_mut().push(view.status.clone()));
        adapter.subscribe(TracingObserver);

        adapter.dispatch(Intent::Play(0)).unwrap();
        adapter.dispatch(Intent::Play(0)).unwrap();
        adapter.dispatch(Intent::JumpTo(1)).unwrap();
        adapter.dispatch(Intent::Undo).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec!["Next player: O".to_string(), "Next player: X".to_string()]
        );
    }
}

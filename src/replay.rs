//! Headless sessions: apply a scripted list of intents and return the final view.

use crate::games::tictactoe::{GameEngine, MoveError};
use crate::settings::Settings;
use crate::view::{GameView, Intent, ViewAdapter};
use tracing::{info, instrument};

/// Plays `cells` in order from a fresh game, then jumps to `jump` if given.
///
/// # Errors
///
/// Only when the settings select the reject policy and an intent is refused.
#[instrument(skip(settings))]
pub fn replay(
    cells: &[usize],
    jump: Option<usize>,
    settings: &Settings,
) -> Result<GameView, MoveError> {
    let intents = cells
        .iter()
        .map(|&cell| Intent::Play(cell))
        .chain(jump.map(Intent::JumpTo));
    run_intents(intents, settings)
}

/// Dispatches each intent in turn against a fresh game.
///
/// # Errors
///
/// Only when the settings select the reject policy and an intent is refused.
#[instrument(skip(intents, settings))]
pub fn run_intents(
    intents: impl IntoIterator<Item = Intent>,
    settings: &Settings,
) -> Result<GameView, MoveError> {
    let engine = GameEngine::with_sort_order(*settings.sort_order());
    let mut adapter = ViewAdapter::with_policy(engine, *settings.invalid_intents());

    let mut applied = 0usize;
    for intent in intents {
        if adapter.dispatch(intent)? {
            applied += 1;
        }
    }

    let view = adapter.view();
    info!(applied, status = %view.status, "Replay finished");
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::InvalidIntentPolicy;

    #[test]
    fn test_replay_with_jump() {
        let view = replay(&[0, 4, 1], Some(1), &Settings::default()).unwrap();
        assert_eq!(view.cursor, 1);
        assert_eq!(view.moves.len(), 4);
        assert!(view.can_redo);
    }

    #[test]
    fn test_replay_skips_invalid_by_default() {
        let view = replay(&[4, 4, 11], None, &Settings::default()).unwrap();
        assert_eq!(view.moves.len(), 2);
    }

    #[test]
    fn test_replay_reject_stops_at_first_refusal() {
        let settings = Settings::default().with_invalid_intents(InvalidIntentPolicy::Reject);
        let err = replay(&[4, 4], None, &settings).unwrap_err();
        assert!(matches!(err, MoveError::SquareOccupied(_)));
    }
}

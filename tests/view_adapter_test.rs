//! Tests for the view adapter boundary.

use std::cell::RefCell;
use std::rc::Rc;
use tictactoe_history::{
    GameEngine, GameView, Intent, InvalidIntentPolicy, MoveError, SortOrder, ViewAdapter,
};

fn adapter_after(cells: &[usize]) -> ViewAdapter {
    let mut adapter = ViewAdapter::new(GameEngine::new());
    for &cell in cells {
        assert_eq!(adapter.dispatch(Intent::Play(cell)), Ok(true));
    }
    adapter
}

#[test]
fn test_cell_labels_and_status() {
    let adapter = adapter_after(&[4, 0]);
    let view = adapter.view();

    let labels: Vec<&str> = view.cells.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["O", "", "", "", "X", "", "", "", ""]);
    assert_eq!(view.status, "Next player: X");
    assert_eq!(view.winning_line, None);
}

#[test]
fn test_move_list_marks_current_entry() {
    let mut adapter = adapter_after(&[4, 0, 8]);
    adapter.dispatch(Intent::JumpTo(1)).unwrap();
    let view = adapter.view();

    let current: Vec<usize> = view
        .moves
        .iter()
        .filter(|entry| entry.current)
        .map(|entry| entry.target)
        .collect();
    assert_eq!(current, vec![1]);
    assert!(view.can_undo);
    assert!(view.can_redo);
}

#[test]
fn test_descending_sort_reverses_entries() {
    let mut adapter = adapter_after(&[4, 0]);
    adapter.dispatch(Intent::ToggleSort).unwrap();
    let view = adapter.view();

    assert_eq!(view.sort_order, SortOrder::Descending);
    let targets: Vec<usize> = view.moves.iter().map(|entry| entry.target).collect();
    assert_eq!(targets, vec![2, 1, 0]);
    assert_eq!(view.moves[2].label, "Start");
    assert_eq!(view.cursor, 2);

    // Clicking an entry jumps by its target, whatever the order.
    let target = view.moves[1].target;
    adapter.dispatch(Intent::JumpTo(target)).unwrap();
    assert_eq!(adapter.view().cursor, 1);
}

#[test]
fn test_undo_redo_controls_disabled_at_bounds() {
    let mut adapter = adapter_after(&[4]);
    let view = adapter.view();
    assert!(view.can_undo);
    assert!(!view.can_redo);

    adapter.dispatch(Intent::Undo).unwrap();
    let view = adapter.view();
    assert!(!view.can_undo);
    assert!(view.can_redo);
}

#[test]
fn test_observer_sees_each_change() {
    let seen: Rc<RefCell<Vec<GameView>>> = Rc::new(RefCell::new(Vec::new()));
    let mut adapter = ViewAdapter::new(GameEngine::new());
    let sink = Rc::clone(&seen);
    adapter.subscribe(move |view: &GameView| sink.borrow_mut().push(view.clone()));

    adapter.dispatch(Intent::Play(0)).unwrap();
    adapter.dispatch(Intent::Play(0)).unwrap(); // occupied
    adapter.dispatch(Intent::Redo).unwrap(); // at end
    adapter.dispatch(Intent::ToggleSort).unwrap();
    adapter.dispatch(Intent::JumpTo(0)).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].cells[0].label, "X");
    assert_eq!(seen[1].sort_order, SortOrder::Descending);
    assert_eq!(seen[2].cursor, 0);
    assert_eq!(seen.last(), Some(&adapter.view()));
}

#[test]
fn test_policy_switch() {
    let mut lenient = adapter_after(&[0, 4, 1, 5, 2]);
    assert_eq!(lenient.dispatch(Intent::Play(8)), Ok(false));

    let mut strict = ViewAdapter::with_policy(GameEngine::new(), InvalidIntentPolicy::Reject);
    for cell in [0, 4, 1, 5, 2] {
        strict.dispatch(Intent::Play(cell)).unwrap();
    }
    assert_eq!(strict.dispatch(Intent::Play(8)), Err(MoveError::GameOver));
    assert_eq!(strict.dispatch(Intent::JumpTo(9)), Err(MoveError::OutOfRange { index: 9, len: 6 }));
    assert_eq!(strict.view(), lenient.view());
}

#[test]
fn test_view_serializes_to_json() {
    let adapter = adapter_after(&[0, 4, 1, 5, 2]);
    let json = serde_json::to_value(adapter.view()).unwrap();
    assert_eq!(json["status"], "Winner: X");
    assert_eq!(json["winning_line"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["sort_order"], "ascending");
    assert_eq!(json["moves"][5]["label"], "Final move 5: X at (1, 3)");
}

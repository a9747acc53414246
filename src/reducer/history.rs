//! Undo history.
//!
//! History is a flat stack of `Board` snapshots. A snapshot never carries a
//! history of its own, so storage grows with the number of moves only, and
//! each push is an O(1) persistent-vector clone.

use crate::core::action::Transition;
use crate::core::state::{Board, GameState};

/// Continue from `board`, remembering the current board for undo.
pub(crate) fn commit(state: &GameState, board: Board, win_count: u32) -> GameState {
    let mut history = state.history().clone();
    history.push_back(state.board().clone());
    GameState::from_parts(board, state.draw_mode(), history, win_count)
}

/// Restore the most recent snapshot.
///
/// The win counter is not part of a snapshot: the current value is kept,
/// and since it never decreases it is always the greater of the two.
pub(crate) fn undo(state: &GameState) -> (GameState, Transition) {
    let mut history = state.history().clone();
    match history.pop_back() {
        Some(board) => (
            GameState::from_parts(board, state.draw_mode(), history, state.win_count()),
            Transition::Undone,
        ),
        None => {
            log::debug!("undo with empty history ignored");
            (state.clone(), Transition::Ignored)
        }
    }
}

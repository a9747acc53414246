//! Auto-complete: drain the board into the foundations.

use super::moves::try_move;
use crate::cards::DECK_SIZE;
use crate::core::action::Transition;
use crate::core::state::GameState;
use crate::rules::next_foundation_move;

/// Upper bound on auto-complete iterations.
///
/// Every iteration puts one more card on a foundation, so a full deck is
/// the most that can ever happen.
pub const AUTO_COMPLETE_LIMIT: usize = DECK_SIZE;

/// Play foundation moves until none is left.
///
/// Each card moved gets its own history entry, so the result can be undone
/// one card at a time.
pub(crate) fn auto_complete(state: &GameState) -> (GameState, Transition) {
    let mut current = state.clone();
    let mut moves = 0;

    while moves < AUTO_COMPLETE_LIMIT {
        let Some(mv) = next_foundation_move(&current) else {
            break;
        };
        let Some(next) = try_move(&current, &mv.from, &mv.to) else {
            break;
        };
        current = next;
        moves += 1;
    }

    if moves == 0 {
        log::debug!("auto-complete found no foundation moves");
        return (current, Transition::Ignored);
    }

    let won = current.game_won();
    if won {
        log::info!("game won by auto-complete, {} wins so far", current.win_count());
    }
    (current, Transition::AutoCompleted { moves, won })
}

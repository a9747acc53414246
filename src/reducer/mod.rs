//! The state reducer.
//!
//! `reduce(state, action, rng)` is the single transition function. It never
//! modifies its input: every call returns a new `GameState`, sharing
//! structure with the old one through `im`'s persistent vectors.
//!
//! ## Failure semantics
//!
//! Transitions are total. Illegal moves come back as `Transition::Rejected`
//! and no-op requests as `Transition::Ignored`, both with the state
//! unchanged and nothing pushed to history. Locations that cannot exist in
//! a 52-card game are caller bugs and panic.
//!
//! Once a game is won, only `Undo` and `NewGame` do anything.

pub mod auto_complete;
mod deal;
mod history;
mod moves;

pub use auto_complete::AUTO_COMPLETE_LIMIT;

use crate::core::action::{Action, Transition};
use crate::core::rng::RandomSource;
use crate::core::state::GameState;

/// Apply `action` to `state`, returning the next state.
///
/// `rng` is only consulted by `Action::NewGame`.
#[must_use]
pub fn reduce<R: RandomSource + ?Sized>(state: &GameState, action: &Action, rng: &mut R) -> GameState {
    apply(state, action, rng).0
}

/// Apply `action` to `state`, returning the next state and what happened.
#[must_use]
pub fn apply<R: RandomSource + ?Sized>(
    state: &GameState,
    action: &Action,
    rng: &mut R,
) -> (GameState, Transition) {
    if let Action::Move { from, to } = action {
        from.validate();
        to.validate();
    }

    let (next, transition) = match *action {
        Action::NewGame { draw_mode } => (deal::new_game(state, draw_mode, rng), Transition::Dealt),
        Action::Undo => history::undo(state),
        _ if state.game_won() => {
            log::debug!("{:?} ignored: game already won", action);
            (state.clone(), Transition::Ignored)
        }
        Action::Draw => deal::draw(state),
        Action::Move { from, to } => moves::move_cards(state, &from, &to),
        Action::AutoMove { card_id } => moves::auto_move(state, card_id),
        Action::AutoComplete => auto_complete::auto_complete(state),
    };

    log::trace!("{:?} -> {:?}", action, transition);
    (next, transition)
}

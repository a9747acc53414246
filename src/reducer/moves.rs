//! Move execution: explicit moves and auto-move.

use super::history::commit;
use crate::cards::CardId;
use crate::core::action::Transition;
use crate::core::state::{Board, GameState};
use crate::rules::{
    can_move_to_tableau, can_place_on_foundation, find_auto_move_target, find_tableau_target,
    get_movable_cards, is_board_won, locate_card,
};
use crate::zones::{Location, PileKind, Pile};

/// Apply a move, reporting a rejection if it is illegal.
pub(crate) fn move_cards(state: &GameState, from: &Location, to: &Location) -> (GameState, Transition) {
    match try_move(state, from, to) {
        Some(next) if next.game_won() => {
            log::info!("game won, {} wins so far", next.win_count());
            (next, Transition::Won)
        }
        Some(next) => (next, Transition::Moved),
        None => {
            log::debug!("rejected move {} -> {}", from, to);
            (state.clone(), Transition::Rejected)
        }
    }
}

/// The state after moving the cards at `from` onto `to`, if legal.
///
/// Multi-card runs only go onto the tableau. A face-down card exposed at
/// the top of the source column is turned up. Completing the foundations
/// sets `game_won` and bumps the win counter.
pub(crate) fn try_move(state: &GameState, from: &Location, to: &Location) -> Option<GameState> {
    let run = get_movable_cards(from, state);
    let lead = run.first()?;

    let legal = match to.pile {
        PileKind::Tableau => can_move_to_tableau(lead, state.tableau(to.index)),
        PileKind::Foundation => run.len() == 1 && can_place_on_foundation(lead, to.index, state),
        PileKind::Stock | PileKind::Waste => false,
    };
    if !legal {
        return None;
    }

    let mut board = state.board().clone();

    let source = pile_mut(&mut board, from);
    let remaining = source.len() - run.len();
    source.truncate(remaining);
    if from.pile == PileKind::Tableau {
        if let Some(top) = source.back_mut() {
            top.face_up = true;
        }
    }

    pile_mut(&mut board, to).extend(run.iter().copied());

    board.game_won = is_board_won(&board);
    let newly_won = board.game_won && !state.game_won();
    let win_count = state.win_count() + u32::from(newly_won);

    log::trace!("moved {} card(s) {} -> {}", run.len(), from, to);
    Some(commit(state, board, win_count))
}

/// Send the card with `card_id` to its best destination.
///
/// The card must lead a movable run where it lies (the waste or foundation
/// top, or the base of a valid tableau run). Single cards try the
/// foundations before the tableau; longer runs only look at the tableau.
pub(crate) fn auto_move(state: &GameState, card_id: CardId) -> (GameState, Transition) {
    assert!(
        CardId::try_new(card_id.raw()).is_some(),
        "Card id {} out of range (0-51)",
        card_id.raw()
    );

    let Some(from) = locate_card(card_id, state) else {
        log::debug!("auto-move of {} ignored: card not on board", card_id);
        return (state.clone(), Transition::Ignored);
    };

    let run = get_movable_cards(&from, state);
    let lead = match run.first() {
        Some(lead) if lead.id() == card_id => lead,
        _ => {
            log::debug!("auto-move of {} ignored: not movable from {}", card_id, from);
            return (state.clone(), Transition::Ignored);
        }
    };

    let target = if run.len() > 1 {
        find_tableau_target(lead, state)
    } else {
        find_auto_move_target(lead, state)
    };

    match target {
        Some(to) => move_cards(state, &from, &to),
        None => {
            log::debug!("auto-move of {} ignored: no destination", card_id);
            (state.clone(), Transition::Ignored)
        }
    }
}

fn pile_mut<'a>(board: &'a mut Board, location: &Location) -> &'a mut Pile {
    match location.pile {
        PileKind::Stock => &mut board.stock,
        PileKind::Waste => &mut board.waste,
        PileKind::Tableau => &mut board.tableau[location.index],
        PileKind::Foundation => &mut board.foundations[location.index],
    }
}

//! Queries over a whole game state.
//!
//! Everything here is pure. Search orders are fixed and part of the
//! contract: foundations before tableau, foundations in suit order
//! (spades, hearts, diamonds, clubs), tableau columns left to right.

use super::placement::{can_move_to_foundation, can_move_to_tableau, is_valid_run};
use crate::cards::{Card, CardId, RANKS_PER_SUIT};
use crate::core::action::Move;
use crate::core::state::{Board, GameState};
use crate::zones::{Location, PileKind, Run, FOUNDATION_PILES, TABLEAU_COLUMNS};

/// Can `card` go onto foundation `index`?
///
/// Each foundation is bound to one suit, so besides the stacking rule the
/// card's suit must match the pile's slot.
#[must_use]
pub fn can_place_on_foundation(card: &Card, index: usize, state: &GameState) -> bool {
    card.suit.index() == index && can_move_to_foundation(card, state.foundation(index))
}

/// The cards that would move as a unit if picked up at `from`, bottom first.
///
/// - Stock: always empty (stock cards only leave by drawing).
/// - Waste, foundation: the top card, or empty.
/// - Tableau: the card at `position` (top card if `None`) and every card
///   above it, but only if they are all face-up and form a valid run.
///
/// Panics if `from` is malformed.
#[must_use]
pub fn get_movable_cards(from: &Location, state: &GameState) -> Run {
    from.validate();

    let mut run = Run::new();
    match from.pile {
        PileKind::Stock => {}
        PileKind::Waste => run.extend(state.waste().last().copied()),
        PileKind::Foundation => run.extend(state.foundation(from.index).last().copied()),
        PileKind::Tableau => {
            let column = state.tableau(from.index);
            if column.is_empty() {
                return run;
            }
            let position = from.position.unwrap_or(column.len() - 1);
            if position >= column.len() {
                return run;
            }
            run.extend(column.iter().skip(position).copied());
            if !is_valid_run(&run) {
                run.clear();
            }
        }
    }
    run
}

/// First foundation (in suit order) that accepts `card`.
#[must_use]
pub fn find_foundation_target(card: &Card, state: &GameState) -> Option<Location> {
    (0..FOUNDATION_PILES)
        .find(|&i| can_place_on_foundation(card, i, state))
        .map(Location::foundation)
}

/// First tableau column (left to right) that accepts `card`.
#[must_use]
pub fn find_tableau_target(card: &Card, state: &GameState) -> Option<Location> {
    (0..TABLEAU_COLUMNS)
        .find(|&i| can_move_to_tableau(card, state.tableau(i)))
        .map(Location::tableau)
}

/// Best destination for `card`: any foundation first, then the tableau.
#[must_use]
pub fn find_auto_move_target(card: &Card, state: &GameState) -> Option<Location> {
    find_foundation_target(card, state).or_else(|| find_tableau_target(card, state))
}

/// Where is the card with this identity?
///
/// Tableau locations carry the card's position. Returns `None` if the card
/// is not on the board (possible only for partial layouts).
#[must_use]
pub fn locate_card(id: CardId, state: &GameState) -> Option<Location> {
    if state.stock().iter().any(|c| c.id() == id) {
        return Some(Location::stock());
    }
    if state.waste().iter().any(|c| c.id() == id) {
        return Some(Location::waste());
    }
    for (index, column) in state.tableau_columns().iter().enumerate() {
        if let Some(position) = column.iter().position(|c| c.id() == id) {
            return Some(Location::tableau_at(index, position));
        }
    }
    state
        .foundations()
        .iter()
        .position(|f| f.iter().any(|c| c.id() == id))
        .map(Location::foundation)
}

/// Every foundation holds a full suit.
#[must_use]
pub fn is_game_won(state: &GameState) -> bool {
    is_board_won(state.board())
}

pub(crate) fn is_board_won(board: &Board) -> bool {
    board.foundations.iter().all(|f| f.len() == RANKS_PER_SUIT)
}

/// No hidden information remains: stock and waste are empty and every
/// tableau card is face-up.
#[must_use]
pub fn can_auto_complete(state: &GameState) -> bool {
    state.stock().is_empty()
        && state.waste().is_empty()
        && state
            .tableau_columns()
            .iter()
            .all(|column| column.iter().all(|c| c.face_up))
}

/// The next foundation move auto-complete would make.
///
/// Candidates are the waste top, then each tableau top left to right; the
/// first one with a foundation destination wins.
#[must_use]
pub fn next_foundation_move(state: &GameState) -> Option<Move> {
    let sources = std::iter::once(Location::waste()).chain((0..TABLEAU_COLUMNS).map(Location::tableau));

    sources
        .filter_map(|from| {
            let run = get_movable_cards(&from, state);
            let card = run.first()?;
            find_foundation_target(card, state).map(|to| Move { from, to })
        })
        .next()
}

/// Every legal move in the current position.
///
/// Sources in order: waste top, tableau runs (columns left to right, longest
/// run first), foundation tops. For each source, foundation destinations
/// come before tableau destinations. Drawing is always available separately
/// and is not listed.
///
/// Moving a whole column onto an empty column changes nothing and is
/// omitted, although `apply` still accepts it.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();
    if state.game_won() {
        return moves;
    }

    let mut sources = vec![Location::waste()];
    for (index, column) in state.tableau_columns().iter().enumerate() {
        if let Some(first_up) = column.iter().position(|c| c.face_up) {
            sources.extend((first_up..column.len()).map(|p| Location::tableau_at(index, p)));
        }
    }
    sources.extend((0..FOUNDATION_PILES).map(Location::foundation));

    for from in sources {
        let run = get_movable_cards(&from, state);
        let Some(lead) = run.first() else {
            continue;
        };

        if run.len() == 1 && from.pile != PileKind::Foundation {
            moves.extend(
                (0..FOUNDATION_PILES)
                    .filter(|&i| can_place_on_foundation(lead, i, state))
                    .map(|i| Move {
                        from,
                        to: Location::foundation(i),
                    }),
            );
        }

        moves.extend(
            (0..TABLEAU_COLUMNS)
                .filter(|&i| !(from.pile == PileKind::Tableau && from.index == i))
                .filter(|&i| can_move_to_tableau(lead, state.tableau(i)))
                .filter(|&i| !(from.position == Some(0) && state.tableau(i).is_empty()))
                .map(|i| Move {
                    from,
                    to: Location::tableau(i),
                }),
        );
    }

    moves
}

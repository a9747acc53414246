//! Klondike rule evaluator.
//!
//! Pure, side-effect-free predicates and searches:
//! - Whether a card may be placed on a tableau column or foundation
//! - Which cards move together from a location
//! - Where auto-move and auto-complete send a card
//! - Win and auto-complete readiness checks
//!
//! The reducer consults these before every mutation and never bypasses them.

pub mod placement;
pub mod search;

pub use placement::{can_move_to_foundation, can_move_to_tableau, is_valid_run};
pub use search::{
    can_auto_complete, can_place_on_foundation, find_auto_move_target, find_foundation_target,
    find_tableau_target, get_movable_cards, is_game_won, legal_moves, locate_card,
    next_foundation_move,
};

pub(crate) use search::is_board_won;

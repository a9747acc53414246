//! # klondike-engine
//!
//! The rules engine of a Klondike solitaire game.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: Every transition returns a new `GameState` and
//!    leaves its input untouched. Undo is just returning an older value.
//!
//! 2. **Total Transitions**: Illegal moves and empty undos are no-ops, never
//!    errors. Only references that cannot exist in a 52-card game panic.
//!
//! 3. **Injected Randomness**: Shuffling draws from a `RandomSource` passed
//!    in by the caller, so deals are reproducible under a fixed seed.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles and history are `im` vectors, so
//!   a snapshot is an O(1) clone sharing structure with its successor.
//!
//! - **Flat History**: Undo snapshots are `Board`s, which have no history
//!   of their own. Storage grows with the number of moves, not its square.
//!
//! - **Fixed Priorities**: Auto-move and auto-complete search in a fixed,
//!   observable order: foundations before tableau, suits in the order
//!   spades, hearts, diamonds, clubs, tableau columns left to right.
//!
//! ## Modules
//!
//! - `core`: State, actions, RNG, configuration
//! - `cards`: Cards, deck construction, shuffling, colors
//! - `zones`: Piles and locations
//! - `rules`: Legality predicates and destination searches
//! - `reducer`: The transition function, history, auto-complete
//! - `game`: A host owning the current state and RNG

pub mod cards;
pub mod core;
pub mod game;
pub mod reducer;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, DrawMode, GameConfig, GameRng, GameRngState, GameState, GameStateBuilder, Move,
    RandomSource, Transition,
};

pub use crate::cards::{create_deck, is_red, opposite_color, shuffle, Card, CardId, Rank, Suit};

pub use crate::zones::{Location, PileKind, Pile, Run};

pub use crate::rules::{
    can_auto_complete, can_move_to_foundation, can_move_to_tableau, find_auto_move_target,
    get_movable_cards, is_game_won, legal_moves, locate_card,
};

pub use crate::reducer::{apply, reduce};

pub use crate::game::Game;

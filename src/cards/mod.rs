//! Card and deck model.
//!
//! ## Key Types
//!
//! - `Card`: Suit, rank and orientation (`Copy`)
//! - `CardId`: Stable identity derived from suit and rank
//! - `Suit`, `Rank`: The 4 x 13 card universe
//!
//! Deck helpers (`create_deck`, `shuffle`, color classification) are pure;
//! shuffling draws from an injected `RandomSource`.

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit, DECK_SIZE, RANKS_PER_SUIT};
pub use deck::{create_deck, is_red, opposite_color, shuffle};

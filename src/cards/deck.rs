//! Deck construction, shuffling and color classification.

use super::card::{Card, Rank, Suit, DECK_SIZE};
use crate::core::rng::RandomSource;

/// Build the 52-card deck, face-down, in suit order then rank order.
///
/// No randomness: the result is always the same.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::all() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Return a uniformly random permutation of `cards`.
///
/// Fisher–Yates driven by `rng`; the input slice is left untouched.
#[must_use]
pub fn shuffle<R: RandomSource + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.next_index(i + 1);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Hearts and diamonds are red; spades and clubs are black.
#[must_use]
pub const fn is_red(suit: Suit) -> bool {
    suit.is_red()
}

/// True iff exactly one of the two suits is red.
#[must_use]
pub const fn opposite_color(a: Suit, b: Suit) -> bool {
    is_red(a) != is_red(b)
}

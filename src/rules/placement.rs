//! Legality of placing a card on a pile.

use crate::cards::{opposite_color, Card, Rank};
use crate::zones::Pile;

/// Can `card` be placed on tableau `column`?
///
/// An empty column takes only a King. Otherwise the column's top card must
/// be face-up, of the opposite color, and exactly one rank higher.
#[must_use]
pub fn can_move_to_tableau(card: &Card, column: &Pile) -> bool {
    match column.last() {
        None => card.rank == Rank::KING,
        Some(top) => {
            top.face_up
                && opposite_color(card.suit, top.suit)
                && card.rank.value() + 1 == top.rank.value()
        }
    }
}

/// Can `card` be placed on `foundation`?
///
/// An empty foundation takes only an Ace. Otherwise the card must match the
/// top card's suit and be exactly one rank higher.
#[must_use]
pub fn can_move_to_foundation(card: &Card, foundation: &Pile) -> bool {
    match foundation.last() {
        None => card.rank == Rank::ACE,
        Some(top) => card.suit == top.suit && card.rank.value() == top.rank.value() + 1,
    }
}

/// Does `run` (bottom card first) form a valid tableau sequence?
///
/// Every card face-up, colors alternating, ranks descending by one.
#[must_use]
pub fn is_valid_run(run: &[Card]) -> bool {
    run.iter().all(|c| c.face_up)
        && run.windows(2).all(|pair| {
            opposite_color(pair[0].suit, pair[1].suit)
                && pair[1].rank.value() + 1 == pair[0].rank.value()
        })
}

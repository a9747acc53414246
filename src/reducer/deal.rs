//! Dealing and drawing.

use super::history::commit;
use crate::cards::{create_deck, shuffle, Card};
use crate::core::action::Transition;
use crate::core::config::DrawMode;
use crate::core::rng::RandomSource;
use crate::core::state::{Board, GameState};
use crate::zones::{Pile, TABLEAU_COLUMNS};

/// Shuffle a fresh deck and deal it.
///
/// Column `i` receives `i + 1` cards with only the last one face-up; the
/// remaining 24 form the face-down stock. History is cleared and the win
/// counter carried over.
pub(crate) fn new_game<R: RandomSource + ?Sized>(
    state: &GameState,
    draw_mode: DrawMode,
    rng: &mut R,
) -> GameState {
    let deck = shuffle(&create_deck(), rng);
    let mut board = Board::default();

    let mut offset = 0;
    for (index, column) in board.tableau.iter_mut().enumerate() {
        let dealt = &deck[offset..offset + index + 1];
        *column = dealt
            .iter()
            .enumerate()
            .map(|(position, card)| if position == index { card.turned_up() } else { card.turned_down() })
            .collect();
        offset += index + 1;
    }
    debug_assert_eq!(offset, TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2);
    board.stock = deck[offset..].iter().copied().map(Card::turned_down).collect();

    log::info!("dealt new game, draw {}", draw_mode.count());
    GameState::from_parts(board, draw_mode, im::Vector::new(), state.win_count())
}

/// Turn cards from the stock, or recycle the waste.
///
/// With cards in the stock, up to `draw_mode` cards are taken one at a time
/// from the top and laid face-up on the waste, so the last card taken ends
/// up on top. With an empty stock, the waste is turned over into a new
/// face-down stock whose top is the first card that was drawn.
pub(crate) fn draw(state: &GameState) -> (GameState, Transition) {
    let board = state.board();

    if !board.stock.is_empty() {
        let count = state.draw_mode().count().min(board.stock.len());
        let mut next = board.clone();
        for _ in 0..count {
            if let Some(card) = next.stock.pop_back() {
                next.waste.push_back(card.turned_up());
            }
        }
        return (commit(state, next, state.win_count()), Transition::Drew { count });
    }

    if board.waste.is_empty() {
        log::debug!("draw with empty stock and waste ignored");
        return (state.clone(), Transition::Ignored);
    }

    let count = board.waste.len();
    let mut next = board.clone();
    next.stock = recycle(&board.waste);
    next.waste = Pile::new();
    log::debug!("recycled {} waste cards into stock", count);
    (commit(state, next, state.win_count()), Transition::Recycled { count })
}

fn recycle(waste: &Pile) -> Pile {
    waste.iter().rev().copied().map(Card::turned_down).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::core::GameRng;

    fn up(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank)).turned_up()
    }

    #[test]
    fn test_deal_layout() {
        let state = new_game(&GameState::empty(), DrawMode::One, &mut GameRng::new(42));

        let sizes: Vec<_> = state.tableau_columns().iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(state.stock().len(), 24);
        assert!(state.waste().is_empty());
        assert!(state.foundations().iter().all(|f| f.is_empty()));

        for column in state.tableau_columns() {
            let last = column.len() - 1;
            for (position, card) in column.iter().enumerate() {
                assert_eq!(card.face_up, position == last);
            }
        }
        assert_eq!(state.board().cards().filter(|c| c.face_up).count(), 7);
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn test_deal_carries_win_count() {
        let previous = GameState::builder().win_count(5).build();
        let state = new_game(&previous, DrawMode::Three, &mut GameRng::new(1));
        assert_eq!(state.win_count(), 5);
        assert_eq!(state.draw_mode(), DrawMode::Three);
        assert_eq!(state.history_len(), 0);
        assert!(!state.game_won());
    }

    #[test]
    fn test_draw_one() {
        let state = GameState::builder()
            .stock([up(Suit::Spades, 1), up(Suit::Hearts, 2)])
            .build();

        let (next, transition) = draw(&state);

        assert_eq!(transition, Transition::Drew { count: 1 });
        assert_eq!(next.stock().len(), 1);
        assert_eq!(next.waste().len(), 1);
        assert_eq!(next.waste()[0], up(Suit::Hearts, 2));
        assert_eq!(next.history_len(), 1);
    }

    #[test]
    fn test_draw_three_order() {
        let state = GameState::builder()
            .draw_mode(DrawMode::Three)
            .stock([up(Suit::Clubs, 9), up(Suit::Spades, 1), up(Suit::Hearts, 2), up(Suit::Diamonds, 3)])
            .build();

        let (next, _) = draw(&state);

        // The old stock top lands first, so the deepest card drawn is on top.
        let waste: Vec<_> = next.waste().iter().copied().collect();
        assert_eq!(waste, vec![up(Suit::Diamonds, 3), up(Suit::Hearts, 2), up(Suit::Spades, 1)]);
        assert_eq!(next.stock().len(), 1);
    }

    #[test]
    fn test_recycle() {
        let state = GameState::builder()
            .waste([up(Suit::Spades, 1), up(Suit::Hearts, 2), up(Suit::Clubs, 3)])
            .build();

        let (next, transition) = draw(&state);

        assert_eq!(transition, Transition::Recycled { count: 3 });
        assert!(next.waste().is_empty());
        let stock: Vec<_> = next.stock().iter().map(|c| (c.id(), c.face_up)).collect();
        assert_eq!(
            stock,
            vec![
                (up(Suit::Clubs, 3).id(), false),
                (up(Suit::Hearts, 2).id(), false),
                (up(Suit::Spades, 1).id(), false),
            ]
        );
        assert_eq!(next.history_len(), 1);
    }

    #[test]
    fn test_draw_nothing() {
        let state = GameState::empty();
        let (next, transition) = draw(&state);
        assert_eq!(transition, Transition::Ignored);
        assert_eq!(next, state);
    }
}

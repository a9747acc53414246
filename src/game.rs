//! Host: the one long-lived game.
//!
//! `Game` owns the current `GameState` and the random source, and applies
//! actions one at a time. It is the convenience a UI needs; anything more
//! elaborate can call `reducer::apply` directly with its own state pointer.

use crate::core::{Action, GameConfig, GameRng, GameRngState, GameState, Move, Transition};
use crate::reducer::apply;
use crate::rules::{can_auto_complete, legal_moves};

/// A running game session.
///
/// ```
/// use klondike_engine::{Action, Game, GameConfig};
///
/// let mut game = Game::new(GameConfig::default().with_seed(7));
/// assert_eq!(game.state().stock().len(), 24);
///
/// game.dispatch(Action::Draw);
/// assert_eq!(game.state().waste().len(), 1);
///
/// game.dispatch(Action::Undo);
/// assert!(game.state().waste().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    rng: GameRng,
}

impl Game {
    /// Create a game and deal the first hand.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut game = Self::from_parts(GameState::empty(), rng);
        game.dispatch(Action::NewGame {
            draw_mode: config.draw_mode,
        });
        game
    }

    /// Resume from an existing state and RNG.
    #[must_use]
    pub fn from_parts(state: GameState, rng: GameRng) -> Self {
        Self { state, rng }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// RNG position, for reproducing the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Apply one action and replace the current state.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let (next, transition) = apply(&self.state, &action, &mut self.rng);
        self.state = next;
        transition
    }

    /// First legal move in priority order, if any.
    #[must_use]
    pub fn hint(&self) -> Option<Move> {
        legal_moves(&self.state).into_iter().next()
    }

    /// Whether offering auto-complete makes sense right now.
    #[must_use]
    pub fn should_offer_auto_complete(&self) -> bool {
        !self.state.game_won() && can_auto_complete(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DrawMode;

    #[test]
    fn test_new_game_deals() {
        let game = Game::new(GameConfig::default().with_seed(42));
        assert_eq!(game.state().stock().len(), 24);
        assert_eq!(game.state().draw_mode(), DrawMode::One);
        assert_eq!(game.state().check_invariants(), Ok(()));
    }

    #[test]
    fn test_seeded_games_match() {
        let config = GameConfig::default().with_seed(9).with_draw_mode(DrawMode::Three);
        let a = Game::new(config.clone());
        let b = Game::new(config);
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = Game::new(GameConfig::default().with_seed(1));
        let b = Game::new(GameConfig::default().with_seed(2));
        assert_ne!(a.state(), b.state());
    }

    #[test]
    fn test_rng_state_reproduces_next_deal() {
        let mut game = Game::new(GameConfig::default().with_seed(3));
        let saved = game.rng_state();

        game.dispatch(Action::NewGame {
            draw_mode: DrawMode::One,
        });
        let expected = game.state().clone();

        let mut replay = Game::from_parts(GameState::empty(), GameRng::from_state(&saved));
        replay.dispatch(Action::NewGame {
            draw_mode: DrawMode::One,
        });

        assert_eq!(replay.state().board(), expected.board());
    }

    #[test]
    fn test_dispatch_reports_transition() {
        let mut game = Game::new(GameConfig::default().with_seed(5));
        assert_eq!(game.dispatch(Action::Undo), Transition::Ignored);
        assert_eq!(game.dispatch(Action::Draw), Transition::Drew { count: 1 });
        assert_eq!(game.dispatch(Action::Undo), Transition::Undone);
    }

    #[test]
    fn test_hint_is_legal() {
        let game = Game::new(GameConfig::default().with_seed(11));
        if let Some(mv) = game.hint() {
            let mut probe = game.clone();
            assert!(probe.dispatch(mv.into()).changed());
        }
    }

    #[test]
    fn test_hint_skips_shuffling_a_lone_king() {
        use crate::cards::{Card, Rank, Suit};

        let state = GameState::builder()
            .tableau(0, [Card::new(Suit::Spades, Rank::KING).turned_up()])
            .build();
        let game = Game::from_parts(state, GameRng::new(0));

        assert_eq!(game.hint(), None);
    }

    #[test]
    fn test_fresh_deal_does_not_offer_auto_complete() {
        let game = Game::new(GameConfig::default().with_seed(5));
        assert!(!game.should_offer_auto_complete());
    }
}

//! Actions a host can dispatch, and what came of them.
//!
//! The UI layer translates gestures into actions: a drag becomes
//! `Action::Move`, a double-click `Action::AutoMove`, a stock click
//! `Action::Draw`. The reducer answers every action with a new state and a
//! `Transition` saying what actually happened, which feedback layers (sound,
//! celebration) can observe without diffing states.

use serde::{Deserialize, Serialize};

use super::config::DrawMode;
use crate::cards::CardId;
use crate::zones::Location;

/// A card movement between two piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Location,
    pub to: Location,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Everything the reducer understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Shuffle and deal a fresh game.
    NewGame { draw_mode: DrawMode },
    /// Turn cards from stock to waste, or recycle the waste when the stock is empty.
    Draw,
    /// Move the card(s) at `from` onto `to`.
    Move { from: Location, to: Location },
    /// Send a card to its best destination.
    ///
    /// A single card tries the foundations (in suit order) before the
    /// tableau. When the card leads a run of two or more, only tableau
    /// columns are searched, since foundations take one card at a time.
    AutoMove { card_id: CardId },
    /// Restore the previous board.
    Undo,
    /// Play every available foundation move.
    AutoComplete,
}

impl From<Move> for Action {
    fn from(mv: Move) -> Self {
        Action::Move {
            from: mv.from,
            to: mv.to,
        }
    }
}

/// Outcome of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// A new game was dealt.
    Dealt,
    /// Cards were turned from stock to waste.
    Drew { count: usize },
    /// The waste was turned back into the stock.
    Recycled { count: usize },
    /// A move was made.
    Moved,
    /// A move was made and it completed the foundations.
    Won,
    /// The previous board was restored.
    Undone,
    /// Auto-complete made `moves` foundation moves (possibly zero).
    AutoCompleted { moves: usize, won: bool },
    /// The action broke a rule; nothing changed.
    Rejected,
    /// The action had nothing to do; nothing changed.
    Ignored,
}

impl Transition {
    /// Did the state change?
    #[must_use]
    pub fn changed(self) -> bool {
        match self {
            Transition::Rejected | Transition::Ignored => false,
            Transition::AutoCompleted { moves, .. } => moves > 0,
            _ => true,
        }
    }

    /// Did this transition win the game?
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, Transition::Won | Transition::AutoCompleted { won: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_into_action() {
        let mv = Move {
            from: Location::waste(),
            to: Location::foundation(0),
        };
        assert_eq!(
            Action::from(mv),
            Action::Move {
                from: Location::waste(),
                to: Location::foundation(0),
            }
        );
    }

    #[test]
    fn test_transition_changed() {
        assert!(Transition::Dealt.changed());
        assert!(Transition::Drew { count: 1 }.changed());
        assert!(Transition::Won.changed());
        assert!(!Transition::Rejected.changed());
        assert!(!Transition::Ignored.changed());
        assert!(!Transition::AutoCompleted { moves: 0, won: false }.changed());
        assert!(Transition::AutoCompleted { moves: 3, won: false }.changed());
    }

    #[test]
    fn test_transition_is_win() {
        assert!(Transition::Won.is_win());
        assert!(Transition::AutoCompleted { moves: 5, won: true }.is_win());
        assert!(!Transition::Moved.is_win());
    }

    #[test]
    fn test_move_display() {
        let mv = Move {
            from: Location::tableau_at(2, 3),
            to: Location::tableau(5),
        };
        assert_eq!(format!("{}", mv), "tableau[2][3] -> tableau[5]");
    }

    #[test]
    fn test_action_serialization() {
        let actions = [
            Action::NewGame {
                draw_mode: DrawMode::Three,
            },
            Action::Draw,
            Action::Move {
                from: Location::tableau_at(1, 0),
                to: Location::tableau(4),
            },
            Action::AutoMove {
                card_id: CardId::new(17),
            },
            Action::Undo,
            Action::AutoComplete,
        ];

        for action in actions {
            let json = serde_json::to_string(&action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(action, deserialized);
        }
    }
}

//! Game state: the board and its undo history.
//!
//! ## Board
//!
//! One snapshot of the table:
//! - Stock, waste, 7 tableau columns, 4 foundations
//! - Whether the deal has been won
//!
//! ## GameState
//!
//! The complete immutable value a host holds:
//! - The current board
//! - The draw mode of this deal
//! - A flat stack of previous boards (undo history)
//! - The win counter, which survives new deals
//!
//! History stores `Board`s, and `Board` has no history of its own, so
//! snapshots can never nest. All piles use `im` persistent vectors, which
//! makes pushing a snapshot O(1) and shares structure between states.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::DrawMode;
use crate::cards::{Card, CardId, DECK_SIZE, RANKS_PER_SUIT};
use crate::rules::is_valid_run;
use crate::zones::{Pile, FOUNDATION_PILES, TABLEAU_COLUMNS};

/// A snapshot of every pile on the table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Face-down draw pile.
    pub stock: Pile,

    /// Face-up discard pile; top is the most recent draw.
    pub waste: Pile,

    /// The seven columns.
    pub tableau: [Pile; TABLEAU_COLUMNS],

    /// One pile per suit, in suit order.
    pub foundations: [Pile; FOUNDATION_PILES],

    /// All 52 cards are on the foundations.
    pub game_won: bool,
}

impl Board {
    /// Total cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.tableau.iter().map(Vector::len).sum::<usize>()
            + self.foundations.iter().map(Vector::len).sum::<usize>()
    }

    /// Every card on the board, piles in a fixed order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.tableau.iter().flat_map(|p| p.iter()))
            .chain(self.foundations.iter().flat_map(|p| p.iter()))
    }

    /// Cards not yet on a foundation.
    #[must_use]
    pub fn cards_outside_foundations(&self) -> usize {
        self.card_count() - self.foundations.iter().map(Vector::len).sum::<usize>()
    }
}

/// The complete game state.
///
/// Every transition returns a new `GameState` and leaves its input alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    draw_mode: DrawMode,
    history: Vector<Board>,
    win_count: u32,
}

impl GameState {
    /// An empty table: no cards anywhere, nothing dealt yet.
    ///
    /// Dispatch a new game on it to deal.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start building a custom layout.
    #[must_use]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::default()
    }

    pub(crate) fn from_parts(
        board: Board,
        draw_mode: DrawMode,
        history: Vector<Board>,
        win_count: u32,
    ) -> Self {
        Self {
            board,
            draw_mode,
            history,
            win_count,
        }
    }

    // === Accessors ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.board.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.board.waste
    }

    /// Tableau column `index`. Panics if `index >= 7`.
    #[must_use]
    pub fn tableau(&self, index: usize) -> &Pile {
        &self.board.tableau[index]
    }

    #[must_use]
    pub fn tableau_columns(&self) -> &[Pile; TABLEAU_COLUMNS] {
        &self.board.tableau
    }

    /// Foundation `index`. Panics if `index >= 4`.
    #[must_use]
    pub fn foundation(&self, index: usize) -> &Pile {
        &self.board.foundations[index]
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile; FOUNDATION_PILES] {
        &self.board.foundations
    }

    #[must_use]
    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    /// Previous boards, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<Board> {
        &self.history
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn game_won(&self) -> bool {
        self.board.game_won
    }

    #[must_use]
    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    // === Diagnostics ===

    /// Check the structural invariants of a full 52-card game.
    ///
    /// Returns a description of the first violation found. Intended for
    /// tests and debug assertions in hosts.
    pub fn check_invariants(&self) -> Result<(), String> {
        let board = &self.board;

        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        for card in board.cards() {
            if !seen.insert(card.id()) {
                return Err(format!("duplicate card {}", card.id()));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(format!("expected {} cards, found {}", DECK_SIZE, seen.len()));
        }

        if let Some(card) = board.stock.iter().find(|c| c.face_up) {
            return Err(format!("face-up card {} in stock", card));
        }
        if let Some(card) = board.waste.iter().find(|c| !c.face_up) {
            return Err(format!("face-down card {} in waste", card));
        }

        for (index, foundation) in board.foundations.iter().enumerate() {
            if foundation.len() > RANKS_PER_SUIT {
                return Err(format!("foundation {} overfull", index));
            }
            for (position, card) in foundation.iter().enumerate() {
                if card.suit.index() != index || usize::from(card.rank.value()) != position + 1 {
                    return Err(format!("foundation {} out of sequence at {}", index, card));
                }
            }
        }

        for (index, column) in board.tableau.iter().enumerate() {
            let first_up = column.iter().position(|c| c.face_up).unwrap_or(column.len());
            if column.iter().skip(first_up).any(|c| !c.face_up) {
                return Err(format!("tableau {} has a face-down card above a face-up one", index));
            }
            let face_up: Vec<Card> = column.iter().skip(first_up).copied().collect();
            if !is_valid_run(&face_up) {
                return Err(format!("tableau {} face-up cards do not form a run", index));
            }
        }

        let complete = board.foundations.iter().all(|f| f.len() == RANKS_PER_SUIT);
        if complete != board.game_won {
            return Err(format!("game_won is {} but foundations complete is {}", board.game_won, complete));
        }

        Ok(())
    }
}

/// Builder for arbitrary layouts: puzzles, replays and tests.
///
/// Stock cards are forced face-down and waste cards face-up; tableau and
/// foundation cards keep the orientation they are given. The builder does
/// not require all 52 cards, so partial positions are expressible.
#[derive(Clone, Debug, Default)]
pub struct GameStateBuilder {
    board: Board,
    draw_mode: DrawMode,
    win_count: u32,
}

impl GameStateBuilder {
    pub fn draw_mode(mut self, draw_mode: DrawMode) -> Self {
        self.draw_mode = draw_mode;
        self
    }

    pub fn win_count(mut self, win_count: u32) -> Self {
        self.win_count = win_count;
        self
    }

    /// Stock, bottom first.
    pub fn stock(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.board.stock = cards.into_iter().map(Card::turned_down).collect();
        self
    }

    /// Waste, bottom first.
    pub fn waste(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.board.waste = cards.into_iter().map(Card::turned_up).collect();
        self
    }

    /// Tableau column, bottom first. Panics if `index >= 7`.
    pub fn tableau(mut self, index: usize, cards: impl IntoIterator<Item = Card>) -> Self {
        assert!(index < TABLEAU_COLUMNS, "Tableau index {} out of range (0-6)", index);
        self.board.tableau[index] = cards.into_iter().collect();
        self
    }

    /// Foundation pile, bottom first. Panics if `index >= 4`.
    pub fn foundation(mut self, index: usize, cards: impl IntoIterator<Item = Card>) -> Self {
        assert!(index < FOUNDATION_PILES, "Foundation index {} out of range (0-3)", index);
        self.board.foundations[index] = cards.into_iter().map(Card::turned_up).collect();
        self
    }

    /// Finish the layout with an empty history.
    #[must_use]
    pub fn build(mut self) -> GameState {
        self.board.game_won = crate::rules::is_board_won(&self.board);
        GameState::from_parts(self.board, self.draw_mode, Vector::new(), self.win_count)
    }
}

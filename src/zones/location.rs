//! Pile references.
//!
//! A `Location` names a pile and, for tableau columns, optionally a
//! position inside it. Indices outside what a 52-card game can contain are
//! programmer errors: the plain constructors and [`Location::validate`]
//! panic on them, while the `checked_*` constructors return `None` for
//! callers handling untrusted input.

use serde::{Deserialize, Serialize};

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Which kind of pile a location refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Stock,
    Waste,
    Tableau,
    Foundation,
}

impl PileKind {
    /// Number of piles of this kind.
    #[must_use]
    pub const fn pile_count(self) -> usize {
        match self {
            PileKind::Stock | PileKind::Waste => 1,
            PileKind::Tableau => TABLEAU_COLUMNS,
            PileKind::Foundation => FOUNDATION_PILES,
        }
    }
}

/// A placement on the board.
///
/// `position` is only meaningful for tableau piles, where it selects the
/// first card of a run. `None` on a tableau location means the top card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub pile: PileKind,
    pub index: usize,
    pub position: Option<usize>,
}

impl Location {
    /// The stock.
    #[must_use]
    pub const fn stock() -> Self {
        Self {
            pile: PileKind::Stock,
            index: 0,
            position: None,
        }
    }

    /// The waste.
    #[must_use]
    pub const fn waste() -> Self {
        Self {
            pile: PileKind::Waste,
            index: 0,
            position: None,
        }
    }

    /// Top of tableau column `index`.
    ///
    /// Panics if `index >= 7`.
    #[must_use]
    pub fn tableau(index: usize) -> Self {
        Self::checked_tableau(index, None)
            .unwrap_or_else(|| panic!("Tableau index {} out of range (0-6)", index))
    }

    /// Card at `position` in tableau column `index`, plus everything above it.
    ///
    /// Panics if `index >= 7` or `position >= 52`.
    #[must_use]
    pub fn tableau_at(index: usize, position: usize) -> Self {
        Self::checked_tableau(index, Some(position)).unwrap_or_else(|| {
            panic!(
                "Tableau location ({}, {}) out of range (column 0-6, position 0-51)",
                index, position
            )
        })
    }

    /// Foundation `index` (suit order spades, hearts, diamonds, clubs).
    ///
    /// Panics if `index >= 4`.
    #[must_use]
    pub fn foundation(index: usize) -> Self {
        Self::checked_foundation(index)
            .unwrap_or_else(|| panic!("Foundation index {} out of range (0-3)", index))
    }

    /// Tableau location, or `None` if out of range.
    #[must_use]
    pub fn checked_tableau(index: usize, position: Option<usize>) -> Option<Self> {
        let location = Self {
            pile: PileKind::Tableau,
            index,
            position,
        };
        location.is_well_formed().then_some(location)
    }

    /// Foundation location, or `None` if out of range.
    #[must_use]
    pub fn checked_foundation(index: usize) -> Option<Self> {
        let location = Self {
            pile: PileKind::Foundation,
            index,
            position: None,
        };
        location.is_well_formed().then_some(location)
    }

    /// Whether this location can exist in a 52-card game.
    ///
    /// A tableau column never holds more than 52 cards, and only tableau
    /// locations may carry a position.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        if self.index >= self.pile.pile_count() {
            return false;
        }
        match (self.pile, self.position) {
            (_, None) => true,
            (PileKind::Tableau, Some(p)) => p < crate::cards::DECK_SIZE,
            (_, Some(_)) => false,
        }
    }

    /// Panic unless this location is well-formed.
    ///
    /// Locations can be built field by field or deserialized, so the reducer
    /// re-checks them before resolving anything.
    pub fn validate(&self) {
        assert!(self.is_well_formed(), "Malformed location {:?}", self);
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.pile, self.position) {
            (PileKind::Stock, _) => write!(f, "stock"),
            (PileKind::Waste, _) => write!(f, "waste"),
            (PileKind::Tableau, None) => write!(f, "tableau[{}]", self.index),
            (PileKind::Tableau, Some(p)) => write!(f, "tableau[{}][{}]", self.index, p),
            (PileKind::Foundation, _) => write!(f, "foundation[{}]", self.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Location::stock().pile, PileKind::Stock);
        assert_eq!(Location::waste().index, 0);
        assert_eq!(Location::tableau(6).index, 6);
        assert_eq!(Location::tableau_at(2, 1).position, Some(1));
        assert_eq!(Location::foundation(3).pile, PileKind::Foundation);
    }

    #[test]
    fn test_checked_constructors() {
        assert!(Location::checked_tableau(7, None).is_none());
        assert!(Location::checked_tableau(0, Some(52)).is_none());
        assert!(Location::checked_tableau(0, Some(51)).is_some());
        assert!(Location::checked_foundation(4).is_none());
        assert!(Location::checked_foundation(0).is_some());
    }

    #[test]
    fn test_well_formed() {
        let bad_stock = Location {
            pile: PileKind::Stock,
            index: 1,
            position: None,
        };
        assert!(!bad_stock.is_well_formed());

        let positioned_waste = Location {
            pile: PileKind::Waste,
            index: 0,
            position: Some(0),
        };
        assert!(!positioned_waste.is_well_formed());
    }

    #[test]
    #[should_panic(expected = "Tableau index 7 out of range")]
    fn test_tableau_out_of_range_panics() {
        let _ = Location::tableau(7);
    }

    #[test]
    #[should_panic(expected = "Foundation index 4 out of range")]
    fn test_foundation_out_of_range_panics() {
        let _ = Location::foundation(4);
    }

    #[test]
    #[should_panic(expected = "Malformed location")]
    fn test_validate_panics() {
        Location {
            pile: PileKind::Foundation,
            index: 9,
            position: None,
        }
        .validate();
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Location::tableau_at(3, 2)), "tableau[3][2]");
        assert_eq!(format!("{}", Location::foundation(1)), "foundation[1]");
    }
}

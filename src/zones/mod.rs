//! Piles and pile references.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered cards, index 0 = bottom, last = top
//! - `Run`: Cards picked up together, bottom card first
//! - `Location`: Pile kind + index (+ tableau position)
//!
//! Piles are `im::Vector`s so that a state snapshot shares structure with
//! its predecessor and clones in O(1).

pub mod location;

pub use location::{Location, PileKind, FOUNDATION_PILES, TABLEAU_COLUMNS};

use smallvec::SmallVec;

use crate::cards::{Card, RANKS_PER_SUIT};

/// An ordered pile of cards. Top = last element.
pub type Pile = im::Vector<Card>;

/// A contiguous sequence moved as a unit. Never longer than a full suit.
pub type Run = SmallVec<[Card; RANKS_PER_SUIT]>;

//! The 52-card domain object.
//!
//! A [`Card`] is a small `Copy` value: suit, rank and orientation. Its
//! [`CardId`] is derived from suit and rank, so identity is stable for the
//! whole game no matter which pile the card sits in or which way it faces.

use serde::{Deserialize, Serialize};

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS_PER_SUIT: usize = 13;

/// Card suit.
///
/// The declaration order is the fixed suit order used for foundation
/// indices and every priority search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Foundation index for this suit (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    /// Suit for a foundation index.
    ///
    /// Panics if `index >= 4`.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::ALL.len(), "Suit index {} out of range (0-3)", index);
        Self::ALL[index]
    }

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Card rank, 1 (Ace) through 13 (King).
///
/// Deserialization goes through [`Rank::try_new`], so out-of-range values
/// are rejected at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank.
    ///
    /// Panics if `value` is outside `1..=13`.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self::try_new(value).unwrap_or_else(|| panic!("Rank {} out of range (1-13)", value))
    }

    /// Create a rank, returning `None` if `value` is outside `1..=13`.
    #[must_use]
    pub const fn try_new(value: u8) -> Option<Self> {
        if value >= 1 && value <= RANKS_PER_SUIT as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw rank value (1-13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=RANKS_PER_SUIT as u8).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or_else(|| format!("Rank {} out of range (1-13)", value))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{}", n),
        }
    }
}

/// Stable card identity: `suit.index() * 13 + (rank - 1)`, in `0..52`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct CardId(u8);

impl CardId {
    /// Create a card ID.
    ///
    /// Panics if `id >= 52`: no such card exists in a well-formed game.
    #[must_use]
    pub fn new(id: u8) -> Self {
        Self::try_new(id).unwrap_or_else(|| panic!("Card id {} out of range (0-51)", id))
    }

    /// Create a card ID, returning `None` if `id >= 52`.
    #[must_use]
    pub const fn try_new(id: u8) -> Option<Self> {
        if (id as usize) < DECK_SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    /// ID of the card with the given suit and rank.
    #[must_use]
    pub const fn of(suit: Suit, rank: Rank) -> Self {
        Self((suit.index() * RANKS_PER_SUIT) as u8 + rank.0 - 1)
    }

    /// Raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Suit encoded by this ID.
    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::from_index(self.0 as usize / RANKS_PER_SUIT)
    }

    /// Rank encoded by this ID.
    #[must_use]
    pub fn rank(self) -> Rank {
        Rank(self.0 % RANKS_PER_SUIT as u8 + 1)
    }
}

impl TryFrom<u8> for CardId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::try_new(id).ok_or_else(|| format!("Card id {} out of range (0-51)", id))
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit().symbol())
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create the card with the given identity, face-down.
    #[must_use]
    pub fn from_id(id: CardId) -> Self {
        Self::new(id.suit(), id.rank())
    }

    /// Stable identity.
    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::of(self.suit, self.rank)
    }

    /// Copy of this card facing up.
    #[must_use]
    pub const fn turned_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// Copy of this card facing down.
    #[must_use]
    pub const fn turned_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}", self.id())
        } else {
            write!(f, "[{}]", self.id())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::try_new(0), None);
        assert_eq!(Rank::try_new(14), None);
        assert_eq!(Rank::try_new(1), Some(Rank::ACE));
        assert_eq!(Rank::try_new(13), Some(Rank::KING));
        assert_eq!(Rank::all().count(), 13);
    }

    #[test]
    #[should_panic(expected = "Rank 0 out of range")]
    fn test_rank_zero_panics() {
        let _ = Rank::new(0);
    }

    #[test]
    fn test_card_id_round_trip() {
        for suit in Suit::ALL {
            for rank in Rank::all() {
                let id = CardId::of(suit, rank);
                assert_eq!(id.suit(), suit);
                assert_eq!(id.rank(), rank);
            }
        }
        assert_eq!(CardId::of(Suit::Spades, Rank::ACE).raw(), 0);
        assert_eq!(CardId::of(Suit::Clubs, Rank::KING).raw(), 51);
    }

    #[test]
    #[should_panic(expected = "Card id 52 out of range")]
    fn test_card_id_out_of_range_panics() {
        let _ = CardId::new(52);
    }

    #[test]
    fn test_id_ignores_orientation() {
        let card = Card::new(Suit::Hearts, Rank::QUEEN);
        assert_eq!(card.id(), card.turned_up().id());
        assert!(card.turned_up().face_up);
        assert!(!card.turned_up().turned_down().face_up);
    }

    #[test]
    fn test_suit_colors() {
        assert!(!Suit::Spades.is_red());
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn test_display() {
        let card = Card::new(Suit::Spades, Rank::ACE);
        assert_eq!(format!("{}", card), "[A♠]");
        assert_eq!(format!("{}", card.turned_up()), "A♠");
        assert_eq!(format!("{}", Card::new(Suit::Diamonds, Rank::new(10)).turned_up()), "10♦");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Suit::Clubs, Rank::JACK).turned_up();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_bad_rank() {
        for rank in [0, 14, 255] {
            let json = format!(r#"{{"suit":"Spades","rank":{},"face_up":true}}"#, rank);
            let err = serde_json::from_str::<Card>(&json).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{}", err);
        }
        let ok: Card = serde_json::from_str(r#"{"suit":"Spades","rank":13,"face_up":true}"#).unwrap();
        assert_eq!(ok.rank, Rank::KING);
    }

    #[test]
    fn test_deserialize_rejects_bad_card_id() {
        assert!(serde_json::from_str::<CardId>("52").is_err());
        assert_eq!(serde_json::from_str::<CardId>("51").unwrap().raw(), 51);
        assert_eq!(serde_json::to_string(&CardId::new(7)).unwrap(), "7");
    }
}

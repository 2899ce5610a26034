//! Card records: suit, rank and identity.
//!
//! A `Card` is an immutable value. Two cards are the same physical card iff
//! their `CardId`s match; within one deck the id is derived from suit and rank.

use serde::{Deserialize, Serialize};

/// Card suit.
///
/// Declaration order is the order used by the by-suit deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Position of this suit in deck order (0-based).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Ranks of a pair must add up to this.
    pub const PAIR_SUM: u8 = 13;

    /// Create a rank, or `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        self.0 == Self::KING.0
    }

    /// Check whether two ranks form a pair (sum to thirteen).
    #[must_use]
    pub const fn pairs_with(self, other: Rank) -> bool {
        self.0 + other.0 == Self::PAIR_SUM
    }

    /// Iterate Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
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

/// Identity of a physical card within one deck.
///
/// `suit_index * 13 + (rank - 1)`, so ids run 0..52.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Number of distinct ids in a deck.
    pub const COUNT: usize = 52;

    #[must_use]
    pub const fn of(rank: Rank, suit: Suit) -> Self {
        Self(suit.index() * 13 + rank.value() - 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A playing card.
///
/// `face_up` only affects presentation; no rule looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// Create a face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
        }
    }

    /// Same card, face down.
    #[must_use]
    pub const fn face_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        CardId::of(self.rank, self.suit)
    }

    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.rank.is_king()
    }

    /// Check whether this card and `other` sum to thirteen.
    #[must_use]
    pub const fn pairs_with(&self, other: &Card) -> bool {
        self.rank.pairs_with(other.rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit.symbol())
    }
}

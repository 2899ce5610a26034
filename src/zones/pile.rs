//! Ordered card piles and their addresses.
//!
//! Every container on the table (stock, columns, foundation) is a `Pile`:
//! a stack whose top is the last element. Only the top is exposed to play;
//! `card_at` exists for inspection.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Address of a tableau column, 0-based from the left.
///
/// An id that does not name a column of the tableau is an absent reference:
/// lookups return `None` and moves built on it are invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColumnId(pub u8);

impl ColumnId {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw column index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over the column ids of a tableau with `count` columns.
    ///
    /// Stops at the last id a `u8` can hold.
    pub fn all(count: usize) -> impl Iterator<Item = ColumnId> {
        (0..count).map_while(|i| u8::try_from(i).ok()).map(ColumnId)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "col{}", self.index() + 1)
    }
}

/// Address of any pile on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Column(ColumnId),
    Foundation,
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Stock => write!(f, "stock"),
            PileId::Column(column) => write!(f, "{}", column),
            PileId::Foundation => write!(f, "foundation"),
        }
    }
}

/// An ordered stack of cards. Index 0 is the bottom, the last card is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Card at `index` counted from the bottom.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Remove and return the top card.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Push a card on top.
    pub fn push_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(rank: u8) -> Card {
        Card::new(Rank::new(rank).unwrap(), Suit::Hearts)
    }

    #[test]
    fn test_push_and_pop() {
        let mut pile = Pile::new();
        assert!(pile.is_empty());
        assert_eq!(pile.pop_top(), None);

        pile.push_top(card(1));
        pile.push_top(card(2));

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top(), Some(&card(2)));
        assert_eq!(pile.pop_top(), Some(card(2)));
        assert_eq!(pile.pop_top(), Some(card(1)));
        assert!(pile.is_empty());
    }

    #[test]
    fn test_card_at_counts_from_bottom() {
        let pile = Pile::from_cards(vec![card(3), card(4), card(5)]);

        assert_eq!(pile.card_at(0), Some(&card(3)));
        assert_eq!(pile.card_at(2), Some(&card(5)));
        assert_eq!(pile.card_at(3), None);
        assert_eq!(pile.top(), pile.card_at(2));
    }

    #[test]
    fn test_column_ids() {
        let ids: Vec<_> = ColumnId::all(5).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(ids[4], ColumnId::new(4));
        assert_eq!(ids[0].to_string(), "col1");
        assert_eq!(PileId::Column(ColumnId::new(2)).to_string(), "col3");
        assert_eq!(PileId::Foundation.to_string(), "foundation");
    }

    #[test]
    fn test_highest_id_display() {
        assert_eq!(ColumnId::new(255).to_string(), "col256");
        assert_eq!(PileId::Column(ColumnId::new(255)).to_string(), "col256");
    }

    #[test]
    fn test_all_stops_at_u8_range() {
        assert_eq!(ColumnId::all(300).count(), 256);
        assert_eq!(ColumnId::all(300).last(), Some(ColumnId::new(255)));
    }
}

//! Standard 52-card deck construction.

use super::card::{Card, Rank, Suit};
use crate::core::config::DeckOrder;
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build a full deck, bottom card first.
///
/// `DeckOrder::BySuit` puts Ace..King of Clubs at the bottom and the King of
/// Spades on top, so card `i` has rank `i % 13 + 1`. `DeckOrder::Shuffled`
/// shuffles that order deterministically from its seed.
#[must_use]
pub fn standard_deck(order: DeckOrder) -> Vec<Card> {
    let mut cards: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| Card::new(rank, suit)))
        .collect();

    if let DeckOrder::Shuffled(seed) = order {
        GameRng::new(seed).shuffle(&mut cards);
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_suit_order() {
        let deck = standard_deck(DeckOrder::BySuit);
        assert_eq!(deck.len(), DECK_SIZE);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.rank.value() as usize, i % 13 + 1);
            assert_eq!(card.suit, Suit::ALL[i / 13]);
        }
    }

    #[test]
    fn test_shuffled_is_deterministic() {
        let a = standard_deck(DeckOrder::Shuffled(7));
        let b = standard_deck(DeckOrder::Shuffled(7));
        let c = standard_deck(DeckOrder::Shuffled(8));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut ids: Vec<_> = standard_deck(DeckOrder::Shuffled(99))
            .iter()
            .map(Card::id)
            .collect();
        ids.sort();
        let expected: Vec<_> = standard_deck(DeckOrder::BySuit)
            .iter()
            .map(Card::id)
            .collect();
        assert_eq!(ids, expected);
    }
}

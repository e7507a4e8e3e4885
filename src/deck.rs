//! The deck container.

use core::fmt;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered sequence of cards, dealt from the front.
///
/// A fresh deck holds all 52 cards with suits in the outer order
/// (Clubs, Diamonds, Hearts, Spades) and ranks in the inner order (Ace..King).
/// Randomized operations take the generator as an argument, so a seeded
/// generator gives reproducible results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding exactly the given cards, front first.
    ///
    /// Duplicates and partial decks are allowed.
    #[must_use]
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffles the deck in place.
    ///
    /// Decks with zero or one card are left as they are. Two cards are
    /// swapped with probability one half. Longer decks get a Fisher-Yates
    /// shuffle, so every permutation is equally likely.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        match self.cards.len() {
            0 | 1 => {}
            2 => {
                if rng.random_bool(0.5) {
                    self.cards.swap(0, 1);
                }
            }
            _ => self.cards.shuffle(rng),
        }
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards are left. The deck is not modified.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Removes and returns the first `count` cards, in dealing order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if fewer than `count` cards are left.
    /// Nothing is dealt in that case.
    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Returns a uniformly random card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards are left.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Card, DeckError> {
        self.cards.choose(rng).copied().ok_or(DeckError::EmptyDeck)
    }

    /// Sorts the remaining cards by suit, then rank.
    ///
    /// The sort is stable.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the deck holds the given card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Returns the cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards, front first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

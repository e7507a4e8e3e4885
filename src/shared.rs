//! A deck that can be dealt from through a shared reference.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::DeckError;
use crate::options::DeckOptions;
use crate::sync::Mutex;

/// A deck and its random source behind locks.
///
/// Every mutating operation is a read-modify-write of the card sequence, so
/// the shared deck serializes them. The generator is seeded once at
/// construction: the same seed and the same sequence of calls always
/// produce the same cards.
#[derive(Debug)]
pub struct SharedDeck {
    /// Cards left to deal.
    deck: Mutex<Deck>,
    /// Deck options.
    pub options: DeckOptions,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl SharedDeck {
    /// Creates a new shared deck with the given seed.
    ///
    /// The deck holds all 52 cards, shuffled unless
    /// [`DeckOptions::shuffle_on_reset`] is off.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, SharedDeck};
    ///
    /// let deck = SharedDeck::new(DeckOptions::default(), 42);
    /// assert_eq!(deck.cards_left(), 52);
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        log::debug!("creating shared deck with seed {seed}");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Self::fresh_deck(options, &mut rng);

        Self {
            deck: Mutex::new(deck),
            options,
            rng: Mutex::new(rng),
        }
    }

    fn fresh_deck(options: DeckOptions, rng: &mut ChaCha8Rng) -> Deck {
        let mut deck = Deck::new();
        if options.shuffle_on_reset {
            deck.shuffle(rng);
        }
        deck
    }

    /// Shuffles the remaining cards.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn shuffle(&self) {
        let mut deck = self.deck.lock();
        let mut rng = self.rng.lock();
        deck.shuffle(&mut *rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards are left.
    pub fn deal(&self) -> Result<Card, DeckError> {
        let card = self.deck.lock().deal();
        if card.is_err() {
            log::trace!("deal attempted on an empty deck");
        }
        card
    }

    /// Removes and returns the first `count` cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if fewer than `count` cards are left.
    pub fn deal_many(&self, count: usize) -> Result<Vec<Card>, DeckError> {
        self.deck.lock().deal_many(count)
    }

    /// Returns a random remaining card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards are left.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn random(&self) -> Result<Card, DeckError> {
        let deck = self.deck.lock();
        let mut rng = self.rng.lock();
        deck.random(&mut *rng)
    }

    /// Sorts the remaining cards by suit, then rank.
    pub fn sort(&self) {
        self.deck.lock().sort();
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.deck.lock().cards_left()
    }

    /// Returns a copy of the remaining cards.
    #[must_use]
    pub fn snapshot(&self) -> Deck {
        self.deck.lock().clone()
    }

    /// Replaces the remaining cards with a full deck.
    ///
    /// The new deck is shuffled if [`DeckOptions::shuffle_on_reset`] is set.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn reset(&self) {
        let mut deck = self.deck.lock();
        let mut rng = self.rng.lock();
        log::debug!("resetting deck with {} cards left", deck.cards_left());
        *deck = Self::fresh_deck(self.options, &mut rng);
    }

    /// Returns whether `deck` has been dealt down to the penetration threshold.
    fn penetration_reached(&self, deck: &Deck) -> bool {
        if self.options.penetration <= 0.0 {
            return false;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (deck.cards_left() as f64 / DECK_SIZE as f64);

        used_ratio >= self.options.penetration
    }

    /// Returns whether enough cards have been dealt to warrant a reset.
    ///
    /// Returns `true` if the dealt fraction has reached the penetration threshold.
    /// If penetration is 0, always returns `false`.
    pub fn needs_reset(&self) -> bool {
        self.penetration_reached(&self.deck.lock())
    }

    /// Checks penetration and resets if needed.
    ///
    /// The check and the reset happen under one lock, so concurrent callers
    /// reset at most once per exhausted shoe.
    /// Returns `true` if a reset was performed.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn check_and_reset(&self) -> bool {
        let mut deck = self.deck.lock();
        if !self.penetration_reached(&deck) {
            return false;
        }

        let mut rng = self.rng.lock();
        log::debug!(
            "penetration {} reached with {} cards left",
            self.options.penetration,
            deck.cards_left()
        );
        *deck = Self::fresh_deck(self.options, &mut rng);
        true
    }

    /// Consumes the shared deck and returns the remaining cards.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn same_seed_deals_the_same_cards() {
        let a = SharedDeck::new(DeckOptions::default(), 42);
        let b = SharedDeck::new(DeckOptions::default(), 42);
        assert_eq!(a.deal_many(10), b.deal_many(10));
        assert_eq!(a.random(), b.random());
    }

    #[test]
    fn unshuffled_deck_starts_canonical() {
        let options = DeckOptions::default().with_shuffle_on_reset(false);
        let deck = SharedDeck::new(options, 0);
        assert_eq!(deck.deal(), Ok(Card::new(Suit::Clubs, Rank::Ace)));
        assert_eq!(deck.cards_left(), DECK_SIZE - 1);
    }

    #[test]
    fn penetration_triggers_reset() {
        let options = DeckOptions::default().with_penetration(0.5);
        let deck = SharedDeck::new(options, 1);

        deck.deal_many(25).unwrap();
        assert!(!deck.needs_reset());
        assert!(!deck.check_and_reset());

        deck.deal().unwrap();
        assert!(deck.needs_reset());
        assert!(deck.check_and_reset());
        assert_eq!(deck.cards_left(), DECK_SIZE);
    }

    #[test]
    fn repeated_check_does_not_restore_dealt_cards() {
        let options = DeckOptions::default().with_penetration(0.5);
        let deck = SharedDeck::new(options, 4);
        deck.deal_many(30).unwrap();

        assert!(deck.check_and_reset());
        let dealt = deck.deal().unwrap();
        assert!(!deck.check_and_reset());

        assert_eq!(deck.cards_left(), DECK_SIZE - 1);
        assert!(!deck.snapshot().contains(dealt));
    }

    #[test]
    fn zero_penetration_never_resets() {
        let deck = SharedDeck::new(DeckOptions::default(), 1);
        deck.deal_many(DECK_SIZE).unwrap();
        assert!(!deck.needs_reset());
        assert_eq!(deck.deal(), Err(DeckError::EmptyDeck));
    }

    #[test]
    fn into_deck_returns_remaining_cards() {
        let deck = SharedDeck::new(DeckOptions::default(), 9);
        deck.deal_many(2).unwrap();
        let snapshot = deck.snapshot();
        let owned = deck.into_deck();
        assert_eq!(owned, snapshot);
        assert_eq!(owned.len(), DECK_SIZE - 2);
    }
}

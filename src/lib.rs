//! A standard 52-card playing-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] value that can be built in canonical order,
//! shuffled with any [`rand::Rng`], dealt from the front, peeked at random and
//! sorted back into order. [`SharedDeck`] wraps a deck and a seeded generator
//! behind locks so one shoe can be dealt from several threads.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, Deck, Rank, Suit};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut deck = Deck::new();
//! assert_eq!(deck.deal(), Ok(Card::new(Suit::Clubs, Rank::Ace)));
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! deck.shuffle(&mut rng);
//! assert_eq!(deck.cards_left(), 51);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, ParseCardError};
pub use options::DeckOptions;
pub use shared::SharedDeck;

//! Error types for deck operations and card parsing.

use thiserror::Error;

/// Errors that can occur while dealing from or peeking into a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("deck is empty")]
    EmptyDeck,
}

/// Errors that can occur while parsing a card, suit or rank from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card string")]
    Empty,
    /// The suit part was not recognized.
    #[error("invalid suit")]
    InvalidSuit,
    /// The rank part was not recognized.
    #[error("invalid rank")]
    InvalidRank,
}

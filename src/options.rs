//! Shared deck configuration options.

/// Configuration options for a [`SharedDeck`](crate::SharedDeck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_shuffle_on_reset(false)
///     .with_penetration(0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckOptions {
    /// Whether a freshly built or reset deck is shuffled.
    pub shuffle_on_reset: bool,
    /// Fraction of the deck dealt before a reset is due.
    /// 0 to disable.
    pub penetration: f64,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            shuffle_on_reset: true,
            penetration: 0.0,
        }
    }
}

impl DeckOptions {
    /// Sets whether a freshly built or reset deck is shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_on_reset(false);
    /// assert_eq!(options.shuffle_on_reset, false);
    /// ```
    #[must_use]
    pub const fn with_shuffle_on_reset(mut self, shuffle: bool) -> Self {
        self.shuffle_on_reset = shuffle;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}

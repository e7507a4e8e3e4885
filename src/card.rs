//! Card, suit and rank types.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits are ordered by declaration: Clubs < Diamonds < Hearts < Spades.
/// This is also the order in which [`Deck::new`](crate::Deck::new) lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Returns the Unicode symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clubs => "♣",
            Self::Diamonds => "♦",
            Self::Hearts => "♥",
            Self::Spades => "♠",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    /// Parses a symbol (`♣`), a letter (`C`, `c`) or a name (`clubs`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|suit| {
                s == suit.symbol()
                    || s.eq_ignore_ascii_case(suit.name())
                    || s.eq_ignore_ascii_case(&suit.name()[..1])
            })
            .ok_or(ParseCardError::InvalidSuit)
    }
}

/// Card rank.
///
/// Ranks are ordered by their numeric [`value`](Rank::value), Ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace (1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (11).
    Jack,
    /// Queen (12).
    Queen,
    /// King (13).
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the numeric value of the rank (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given numeric value, if it is in `1..=13`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if matches!(value, 1..=13) {
            Some(Self::ALL[value as usize - 1])
        } else {
            None
        }
    }

    /// Returns the English name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// Returns the short symbol of the rank (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    /// Parses a rank symbol. Letters are case-insensitive and `T` is accepted for ten.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }
        if s.eq_ignore_ascii_case("t") {
            return Ok(Self::Ten);
        }
        Self::ALL
            .into_iter()
            .find(|rank| s.eq_ignore_ascii_case(rank.symbol()))
            .ok_or(ParseCardError::InvalidRank)
    }
}

/// A playing card.
///
/// Cards compare by suit first, then by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a suit followed by a rank, e.g. `♣A`, `H10` or `st`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.chars().next().ok_or(ParseCardError::Empty)?;
        let (suit, rank) = s.split_at(first.len_utf8());
        if rank.is_empty() {
            return Err(ParseCardError::InvalidRank);
        }
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn rank_values_are_contiguous() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(usize::from(rank.value()), i + 1);
            assert_eq!(Rank::from_value(rank.value()), Some(*rank));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn ordering_is_suit_then_rank() {
        let ace_clubs = Card::new(Suit::Clubs, Rank::Ace);
        assert!(ace_clubs < Card::new(Suit::Clubs, Rank::Two));
        assert!(ace_clubs < Card::new(Suit::Diamonds, Rank::Ace));
        assert!(Card::new(Suit::Clubs, Rank::King) < Card::new(Suit::Diamonds, Rank::Ace));
        assert!(Suit::Hearts < Suit::Spades);
    }

    #[test]
    fn display_and_parse() {
        let card = Card::new(Suit::Hearts, Rank::Ten);
        assert_eq!(card.to_string(), "♥10");
        assert_eq!("♥10".parse::<Card>(), Ok(card));
        assert_eq!("H10".parse::<Card>(), Ok(card));
        assert_eq!("ht".parse::<Card>(), Ok(card));
        assert_eq!("♠q".parse::<Card>(), Ok(Card::new(Suit::Spades, Rank::Queen)));
        assert_eq!("diamonds".parse::<Suit>(), Ok(Suit::Diamonds));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!("♣".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("X5".parse::<Card>(), Err(ParseCardError::InvalidSuit));
        assert_eq!("C11".parse::<Card>(), Err(ParseCardError::InvalidRank));
        assert_eq!("".parse::<Rank>(), Err(ParseCardError::Empty));
    }

    #[test]
    fn every_card_round_trips_through_display() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let card = Card::new(suit, rank);
                assert_eq!(card.to_string().parse::<Card>(), Ok(card));
            }
        }
    }
}

//! Card types and text parsing.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::InputError;

/// Card rank, ordered Ace (low) to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace, always low.
    Ace,
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
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in sequence order.
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

    /// Returns the points this rank counts for fifteens.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns the zero-based position of this rank in the sequence A..K.
    ///
    /// Only used for sorting and runs, never for fifteens.
    #[must_use]
    pub const fn order(self) -> usize {
        self as usize
    }

    /// Returns the rank that directly follows this one, `None` for King.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::King => None,
            _ => Some(Self::ALL[self.order() + 1]),
        }
    }

    /// Returns the rank label used in card tokens.
    #[must_use]
    pub const fn label(self) -> &'static str {
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

impl FromStr for Rank {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(s))
            .ok_or(InputError::InvalidRank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Clubs, Self::Diamonds, Self::Hearts];

    /// Returns the suit letter used in card tokens.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
        }
    }

    /// Parses a suit letter, ignoring case.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(Self::Spades),
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            _ => None,
        }
    }
}

impl FromStr for Suit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or(InputError::InvalidSuit),
            _ => Err(InputError::InvalidSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A playing card.
///
/// Two cards are equal, and hash the same, when rank and suit match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Creates a card from separate rank and suit tokens such as `"10"` and `"h"`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidRank`] or [`InputError::InvalidSuit`] when a
    /// token is not recognized.
    pub fn from_parts(rank: &str, suit: &str) -> Result<Self, InputError> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }

    /// Returns the points this card counts for fifteens.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns the position of this card's rank in the sequence A..K.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.rank.order()
    }

    /// Returns the rank following this card's rank, `None` for a King.
    #[must_use]
    pub const fn next_rank(&self) -> Option<Rank> {
        self.rank.next()
    }
}

impl FromStr for Card {
    type Err = InputError;

    /// Parses a `<rank><suit>` token, the suit being the last character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let Some((split, _)) = token.char_indices().last() else {
            return Err(InputError::MalformedCard);
        };

        if split == 0 {
            return Err(InputError::MalformedCard);
        }

        let (rank, suit) = token.split_at(split);
        Self::from_parts(rank, suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Number of cards in a deal before discarding.
pub const DEAL_SIZE: usize = 6;

/// Parses a comma separated list of exactly six distinct cards.
///
/// Tokens are trimmed and matched case-insensitively, e.g. `"8C, ah, 10H, KC, 5D, 2S"`.
///
/// # Errors
///
/// Returns [`InputError::WrongCardCount`] when the list does not hold six
/// tokens, [`InputError::DuplicateCard`] when a card repeats, or the error of
/// the first malformed token.
pub fn parse_cards(input: &str) -> Result<[Card; DEAL_SIZE], InputError> {
    let tokens: Vec<&str> = input.split(',').collect();
    let found = tokens.len();
    if found != DEAL_SIZE {
        return Err(InputError::WrongCardCount { found });
    }

    let cards = tokens
        .into_iter()
        .map(str::parse::<Card>)
        .collect::<Result<Vec<_>, _>>()?;
    if has_duplicates(&cards) {
        return Err(InputError::DuplicateCard);
    }

    cards
        .try_into()
        .map_err(|_| InputError::WrongCardCount { found })
}

/// Returns whether any card appears more than once.
pub(crate) fn has_duplicates(cards: &[Card]) -> bool {
    cards
        .iter()
        .enumerate()
        .any(|(i, card)| cards[i + 1..].contains(card))
}

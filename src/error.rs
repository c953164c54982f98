//! Error types for parsing, scoring, and advising.

use thiserror::Error;

/// Errors that can occur while reading cards from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Rank token is not one of A, 2-10, J, Q, K.
    #[error("invalid card rank")]
    InvalidRank,
    /// Suit token is not one of S, C, D, H.
    #[error("invalid card suit")]
    InvalidSuit,
    /// Card token is too short to hold a rank and a suit.
    #[error("malformed card, expected <rank><suit>")]
    MalformedCard,
    /// Wrong number of cards in the deal.
    #[error("expected 6 cards, found {found}")]
    WrongCardCount {
        /// Number of cards found.
        found: usize,
    },
    /// The same card was given twice.
    #[error("duplicate card")]
    DuplicateCard,
}

/// Errors that can occur when building a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// Hand does not hold exactly four cards.
    #[error("hand must contain 4 cards, found {found}")]
    WrongCardCount {
        /// Number of held cards given.
        found: usize,
    },
    /// Held cards and flip card are not all distinct.
    #[error("hand contains a duplicate card")]
    DuplicateCard,
}

/// Errors that can occur while aggregating discard scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// A score was already recorded for this flip card.
    #[error("score already recorded for this flip card")]
    DuplicateFlipCard,
    /// Statistics requested before any score was recorded.
    #[error("no scores recorded")]
    EmptyDistribution,
}

/// Errors that can occur while evaluating discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdviseError {
    /// The original deal is invalid.
    #[error(transparent)]
    Input(#[from] InputError),
    /// A candidate hand could not be built.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// A discard aggregator rejected a score or had no data.
    #[error(transparent)]
    Discard(#[from] DiscardError),
}

/// Ranking name is not one of `mean`, `median`, `max`, `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown ranking, expected one of mean, median, max, min")]
pub struct UnknownRanking;

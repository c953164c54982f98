//! Advice result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::discard::Statistics;

/// A discard pair with the statistics of its held cards over every flip card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    /// The two cards to discard.
    pub discard: [Card; 2],
    /// The four cards left in hand.
    pub held: [Card; 4],
    /// Score statistics over the remaining deck.
    pub statistics: Statistics,
}

/// Result of evaluating a six-card deal.
#[derive(Debug, Clone)]
pub struct Advice {
    /// Discard pair with the highest mean score.
    pub best_mean: Recommendation,
    /// Discard pair with the highest possible score.
    pub best_max: Recommendation,
    /// Discard pairs ordered by the configured ranking.
    pub ranked: Vec<Recommendation>,
}

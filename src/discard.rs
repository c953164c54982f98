//! Score distribution of one discard pair over every flip card.

use alloc::vec::Vec;
use core::fmt;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::error::DiscardError;

#[cfg(feature = "std")]
fn round(value: f64) -> f64 {
    value.round()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round(value: f64) -> f64 {
    libm::round(value)
}

/// Descriptive statistics of a score distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Number of recorded scores.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle score, or the average of the two middle scores.
    pub median: f64,
    /// Most frequent score, the lowest one on ties.
    pub mode: u8,
    /// Lowest score.
    pub min: u8,
    /// Highest score.
    pub max: u8,
}

impl Statistics {
    /// Computes statistics over the given scores.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::EmptyDistribution`] if `scores` is empty.
    #[expect(
        clippy::cast_precision_loss,
        reason = "score counts are far below f64 precision"
    )]
    pub fn from_scores(scores: &[u8]) -> Result<Self, DiscardError> {
        if scores.is_empty() {
            return Err(DiscardError::EmptyDistribution);
        }

        let mut sorted = scores.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let total: u32 = sorted.iter().map(|&s| u32::from(s)).sum();
        let mean = f64::from(total) / count as f64;

        let mid = count / 2;
        let median = if count % 2 == 0 {
            (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
        } else {
            f64::from(sorted[mid])
        };

        // Runs of equal scores in ascending order; strict comparison keeps the lowest.
        let mut mode = sorted[0];
        let mut best = 0;
        let mut start = 0;
        while start < count {
            let end = start + sorted[start..].partition_point(|&s| s == sorted[start]);
            if end - start > best {
                best = end - start;
                mode = sorted[start];
            }
            start = end;
        }

        Ok(Self {
            count,
            mean,
            median,
            mode,
            min: sorted[0],
            max: sorted[count - 1],
        })
    }

    /// Returns the mean rounded to `precision` decimal places.
    #[must_use]
    pub fn rounded_mean(&self, precision: u8) -> f64 {
        let mut scale = 1.0;
        for _ in 0..precision {
            scale *= 10.0;
        }
        round(self.mean * scale) / scale
    }
}

/// Scores recorded for one pair of discarded cards, keyed by flip card.
#[derive(Debug, Clone)]
pub struct Discard {
    cards: [Card; 2],
    scores: HashMap<Card, u8>,
}

impl Discard {
    /// Creates an empty aggregator for the given discards.
    #[must_use]
    pub fn new(first: Card, second: Card) -> Self {
        Self {
            cards: [first, second],
            scores: HashMap::new(),
        }
    }

    /// Returns the discarded cards.
    #[must_use]
    pub const fn cards(&self) -> [Card; 2] {
        self.cards
    }

    /// Records the score of the held cards for a flip card.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::DuplicateFlipCard`] if a score was already
    /// recorded for `flip`.
    pub fn add(&mut self, flip: Card, score: u8) -> Result<(), DiscardError> {
        if self.scores.contains_key(&flip) {
            return Err(DiscardError::DuplicateFlipCard);
        }
        self.scores.insert(flip, score);
        Ok(())
    }

    /// Returns the score recorded for a flip card.
    #[must_use]
    pub fn score_for(&self, flip: &Card) -> Option<u8> {
        self.scores.get(flip).copied()
    }

    /// Returns the recorded scores in no particular order.
    #[must_use]
    pub fn scores(&self) -> Vec<u8> {
        self.scores.values().copied().collect()
    }

    /// Returns the flip cards with a recorded score, in no particular order.
    pub fn flips(&self) -> impl Iterator<Item = &Card> {
        self.scores.keys()
    }

    /// Returns the number of recorded scores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns whether no score was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Computes statistics over the recorded scores.
    ///
    /// # Errors
    ///
    /// Returns [`DiscardError::EmptyDistribution`] if no score was recorded.
    pub fn statistics(&self) -> Result<Statistics, DiscardError> {
        Statistics::from_scores(&self.scores())
    }
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.cards[0], self.cards[1])
    }
}

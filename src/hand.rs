//! Hand scoring.

use crate::card::{Card, Rank};
use crate::error::HandError;

/// Number of held cards after discarding.
pub const HAND_SIZE: usize = 4;

/// Points awarded by each scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Points from pairs.
    pub pairs: u8,
    /// Points from fifteens.
    pub fifteens: u8,
    /// Points from runs.
    pub runs: u8,
    /// Points from a flush.
    pub flush: u8,
    /// Point for his nobs.
    pub nobs: u8,
}

impl ScoreBreakdown {
    /// Returns the sum of all rules.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.pairs + self.fifteens + self.runs + self.flush + self.nobs
    }
}

/// Run detection state while scanning rank-sorted cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunScan {
    /// Window shorter than three ranks, may still restart.
    Building { first: Rank, last: Rank, len: usize },
    /// Window of at least three ranks, may still grow.
    Confirmed { first: Rank, last: Rank, len: usize },
    /// A confirmed window was broken by a gap.
    Terminated { first: Rank, len: usize },
}

impl RunScan {
    const fn start(rank: Rank) -> Self {
        Self::Building {
            first: rank,
            last: rank,
            len: 1,
        }
    }

    fn step(self, rank: Rank) -> Self {
        match self {
            Self::Building { first, last, len } => {
                if last.next() == Some(rank) {
                    if len + 1 >= 3 {
                        Self::Confirmed {
                            first,
                            last: rank,
                            len: len + 1,
                        }
                    } else {
                        Self::Building {
                            first,
                            last: rank,
                            len: len + 1,
                        }
                    }
                } else if last == rank {
                    self
                } else {
                    Self::start(rank)
                }
            }
            Self::Confirmed { first, last, len } => {
                if last.next() == Some(rank) {
                    Self::Confirmed {
                        first,
                        last: rank,
                        len: len + 1,
                    }
                } else if last == rank {
                    self
                } else {
                    Self::Terminated { first, len }
                }
            }
            Self::Terminated { .. } => self,
        }
    }

    /// Returns the first rank and length of a scoring run, if any.
    const fn run(self) -> Option<(Rank, usize)> {
        match self {
            Self::Building { .. } => None,
            Self::Confirmed { first, len, .. } | Self::Terminated { first, len } => {
                Some((first, len))
            }
        }
    }
}

/// Four held cards plus the flip card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    held: [Card; HAND_SIZE],
    flip: Card,
    /// Held cards and flip card, stable sorted by rank order.
    sorted: [Card; HAND_SIZE + 1],
}

impl Hand {
    /// Creates a hand from four held cards and a flip card.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::WrongCardCount`] unless exactly four cards are held,
    /// or [`HandError::DuplicateCard`] if the five cards are not distinct.
    pub fn new(held: &[Card], flip: Card) -> Result<Self, HandError> {
        let held: [Card; HAND_SIZE] = held
            .try_into()
            .map_err(|_| HandError::WrongCardCount { found: held.len() })?;

        let mut sorted = [flip; HAND_SIZE + 1];
        sorted[..HAND_SIZE].copy_from_slice(&held);
        if crate::card::has_duplicates(&sorted) {
            return Err(HandError::DuplicateCard);
        }
        sorted.sort_by_key(Card::order);

        Ok(Self { held, flip, sorted })
    }

    /// Returns the held cards.
    #[must_use]
    pub const fn held(&self) -> &[Card; HAND_SIZE] {
        &self.held
    }

    /// Returns the flip card.
    #[must_use]
    pub const fn flip(&self) -> Card {
        self.flip
    }

    /// Returns all five cards sorted by rank, ties in held-then-flip order.
    #[must_use]
    pub const fn sorted(&self) -> &[Card; HAND_SIZE + 1] {
        &self.sorted
    }

    /// Calculates the total score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.breakdown().total()
    }

    /// Calculates the points awarded by each rule.
    #[must_use]
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            pairs: self.pairs(),
            fifteens: self.fifteens(),
            runs: self.runs(),
            flush: self.flush(),
            nobs: self.nobs(),
        }
    }

    /// Two points for every pair of cards with the same rank.
    #[must_use]
    pub fn pairs(&self) -> u8 {
        let mut score = 0;
        for (i, a) in self.sorted.iter().enumerate() {
            for b in &self.sorted[i + 1..] {
                if a.rank == b.rank {
                    score += 2;
                }
            }
        }
        score
    }

    /// Two points for every combination of two or more cards adding up to 15.
    #[must_use]
    pub fn fifteens(&self) -> u8 {
        let mut score = 0;
        for mask in 0u32..1 << self.sorted.len() {
            if mask.count_ones() < 2 {
                continue;
            }

            let sum: u8 = self
                .sorted
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, card)| card.value())
                .sum();

            if sum == 15 {
                score += 2;
            }
        }
        score
    }

    /// Points for the longest run of three or more consecutive ranks.
    ///
    /// A run of length `n` scores `n` times the sum of the counts of its
    /// duplicated ranks, or `n` when no rank in the run is duplicated.
    #[must_use]
    pub fn runs(&self) -> u8 {
        let mut scan = RunScan::start(self.sorted[0].rank);
        for card in &self.sorted[1..] {
            scan = scan.step(card.rank);
        }

        let Some((first, len)) = scan.run() else {
            return 0;
        };

        let mut counts = [0u8; Rank::ALL.len()];
        for card in &self.sorted {
            counts[card.order()] += 1;
        }

        let multiplier: u8 = counts[first.order()..first.order() + len]
            .iter()
            .filter(|&&count| count > 1)
            .sum();

        len as u8 * multiplier.max(1)
    }

    /// Four points when all held cards share a suit, five if the flip matches too.
    #[must_use]
    pub fn flush(&self) -> u8 {
        let suit = self.held[0].suit;
        if self.held.iter().any(|card| card.suit != suit) {
            0
        } else if self.flip.suit == suit {
            5
        } else {
            4
        }
    }

    /// One point for a held Jack of the flip card's suit.
    #[must_use]
    pub fn nobs(&self) -> u8 {
        u8::from(
            self.held
                .iter()
                .any(|card| card.rank == Rank::Jack && card.suit == self.flip.suit),
        )
    }
}

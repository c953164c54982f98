//! Discard evaluation over every discard pair and flip card.

use alloc::vec::Vec;

use log::{debug, info, trace};

use crate::card::{Card, DEAL_SIZE, has_duplicates};
use crate::deck;
use crate::discard::{Discard, Statistics};
use crate::error::{AdviseError, DiscardError, InputError};
use crate::hand::{HAND_SIZE, Hand};
use crate::options::{AdvisorOptions, Ranking};
use crate::result::{Advice, Recommendation};

/// Number of ways to discard two cards from a six-card deal.
pub const DISCARD_PAIRS: usize = 15;

/// Yields the index pairs of every discard choice in combination order.
fn discard_pairs() -> impl Iterator<Item = (usize, usize)> {
    (0..DEAL_SIZE).flat_map(|i| (i + 1..DEAL_SIZE).map(move |j| (i, j)))
}

/// Returns the four cards kept when discarding the cards at `i` and `j`.
fn held_cards(original: &[Card], i: usize, j: usize) -> [Card; HAND_SIZE] {
    let mut held = [original[0]; HAND_SIZE];
    let kept = original
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != i && k != j)
        .map(|(_, card)| *card);

    for (slot, card) in held.iter_mut().zip(kept) {
        *slot = card;
    }
    held
}

/// Scores every discard pair of a six-card deal against every remaining flip card.
///
/// Pairs are returned in combination order over the input cards, i.e.
/// `(0, 1), (0, 2), .., (4, 5)`.
///
/// # Errors
///
/// Returns [`InputError::WrongCardCount`] or [`InputError::DuplicateCard`]
/// for an invalid deal. Hand or aggregator errors indicate an enumeration bug.
pub fn evaluate(original: &[Card]) -> Result<Vec<Discard>, AdviseError> {
    if original.len() != DEAL_SIZE {
        return Err(InputError::WrongCardCount {
            found: original.len(),
        }
        .into());
    }

    if has_duplicates(original) {
        return Err(InputError::DuplicateCard.into());
    }

    let remaining = deck::remaining(original);
    let mut discards = Vec::with_capacity(DISCARD_PAIRS);

    for (i, j) in discard_pairs() {
        let held = held_cards(original, i, j);
        let mut discard = Discard::new(original[i], original[j]);

        for &flip in &remaining {
            let score = Hand::new(&held, flip)?.score();
            trace!("discard {discard} flip {flip}: {score}");
            discard.add(flip, score)?;
        }

        debug!("discard {discard}: {} flip cards scored", discard.len());
        discards.push(discard);
    }

    Ok(discards)
}

fn ranking_key(ranking: Ranking, statistics: &Statistics) -> f64 {
    match ranking {
        Ranking::Mean => statistics.mean,
        Ranking::Median => statistics.median,
        Ranking::Max => f64::from(statistics.max),
        Ranking::Min => f64::from(statistics.min),
    }
}

/// Returns the first recommendation with the highest key.
fn first_best(
    recommendations: &[Recommendation],
    ranking: Ranking,
) -> Result<Recommendation, DiscardError> {
    recommendations
        .iter()
        .copied()
        .reduce(|best, candidate| {
            if ranking_key(ranking, &candidate.statistics) > ranking_key(ranking, &best.statistics)
            {
                candidate
            } else {
                best
            }
        })
        .ok_or(DiscardError::EmptyDistribution)
}

/// Recommends discards for six-card deals.
///
/// # Example
///
/// ```
/// use cribrs::{Advisor, AdvisorOptions, parse_cards};
///
/// let cards = parse_cards("5H, 5D, JS, 10C, 2S, 9H").unwrap();
/// let advice = Advisor::new(AdvisorOptions::default()).advise(&cards).unwrap();
/// assert_eq!(advice.best_mean.statistics.count, 46);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    /// Advisor options.
    pub options: AdvisorOptions,
}

impl Advisor {
    /// Creates an advisor with the given options.
    #[must_use]
    pub const fn new(options: AdvisorOptions) -> Self {
        Self { options }
    }

    /// Evaluates a six-card deal and selects the best discards.
    ///
    /// Ties go to the discard pair enumerated first.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal is not six distinct cards.
    pub fn advise(&self, original: &[Card]) -> Result<Advice, AdviseError> {
        let discards = evaluate(original)?;

        let mut ranked = Vec::with_capacity(discards.len());
        for ((i, j), discard) in discard_pairs().zip(&discards) {
            ranked.push(Recommendation {
                discard: discard.cards(),
                held: held_cards(original, i, j),
                statistics: discard.statistics()?,
            });
        }

        let best_mean = first_best(&ranked, Ranking::Mean)?;
        let best_max = first_best(&ranked, Ranking::Max)?;
        info!(
            "highest mean: {}, {} ({:.2}), highest max: {}, {} ({})",
            best_mean.discard[0],
            best_mean.discard[1],
            best_mean.statistics.mean,
            best_max.discard[0],
            best_max.discard[1],
            best_max.statistics.max,
        );

        let ranking = self.options.ranking;
        ranked.sort_by(|a, b| {
            ranking_key(ranking, &b.statistics).total_cmp(&ranking_key(ranking, &a.statistics))
        });
        ranked.truncate(self.options.top);

        Ok(Advice {
            best_mean,
            best_max,
            ranked,
        })
    }
}

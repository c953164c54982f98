//! Deck enumeration and dealing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DEAL_SIZE, Rank, Suit};

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the 52 canonical cards, rank-major and suit-minor.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Returns every card of the deck that is not in `known`, in deck order.
#[must_use]
pub fn remaining(known: &[Card]) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|card| !known.contains(card))
        .collect()
}

/// Deals six cards from a deck shuffled with the given seed.
///
/// The same seed always yields the same deal.
#[must_use]
pub fn deal(seed: u64) -> [Card; DEAL_SIZE] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cards = full_deck();
    cards.shuffle(&mut rng);

    let mut hand = [cards[0]; DEAL_SIZE];
    hand.copy_from_slice(&cards[..DEAL_SIZE]);
    hand
}

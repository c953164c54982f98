//! A cribbage hand scorer and discard advisor with optional `no_std` support.
//!
//! The crate scores a [`Hand`] of four held cards plus the flip card, and an
//! [`Advisor`] that tries every way of discarding two cards from a six-card
//! deal against every possible flip card.
//!
//! # Example
//!
//! ```
//! use cribrs::{Advisor, AdvisorOptions, Card, Hand, parse_cards};
//!
//! let held: Vec<Card> = ["4C", "4D", "5C", "6C"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! let hand = Hand::new(&held, "6H".parse().unwrap()).unwrap();
//! assert_eq!(hand.score(), 24);
//!
//! let cards = parse_cards("8C, AH, 10H, KC, 5D, 2S").unwrap();
//! let advice = Advisor::new(AdvisorOptions::default()).advise(&cards).unwrap();
//! println!("discard {}, {}", advice.best_mean.discard[0], advice.best_mean.discard[1]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advisor;
pub mod card;
pub mod deck;
pub mod discard;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use advisor::{Advisor, DISCARD_PAIRS, evaluate};
pub use card::{Card, DEAL_SIZE, Rank, Suit, parse_cards};
pub use deck::{DECK_SIZE, deal, full_deck, remaining};
pub use discard::{Discard, Statistics};
pub use error::{AdviseError, DiscardError, HandError, InputError, UnknownRanking};
pub use hand::{HAND_SIZE, Hand, ScoreBreakdown};
pub use options::{AdvisorOptions, Ranking};
pub use result::{Advice, Recommendation};

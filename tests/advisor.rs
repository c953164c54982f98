//! Discard aggregation and advisor integration tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use cribrs::{
    AdviseError, Advisor, AdvisorOptions, Card, DECK_SIZE, DISCARD_PAIRS, Discard, DiscardError,
    InputError, Ranking, Statistics, deal, evaluate, full_deck, parse_cards, remaining,
};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

#[test]
fn deck_enumeration() {
    let deck = full_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.iter().collect::<HashSet<_>>().len(), DECK_SIZE);
    assert_eq!(deck[..4], [card("AS"), card("AC"), card("AD"), card("AH")]);
    assert_eq!(deck[DECK_SIZE - 1], card("KH"));

    let original = parse_cards("8C, AH, 10H, KC, 5D, 2S").unwrap();
    let rest = remaining(&original);
    assert_eq!(rest.len(), DECK_SIZE - original.len());
    assert!(rest.iter().all(|c| !original.contains(c)));
}

#[test]
fn seeded_deal_is_reproducible() {
    let first = deal(7);
    assert_eq!(first, deal(7));
    assert_eq!(first.iter().collect::<HashSet<_>>().len(), first.len());
}

#[test]
fn discard_rejects_duplicate_flip() {
    let mut discard = Discard::new(card("5H"), card("JS"));
    assert_eq!(discard.to_string(), "5H, JS");
    assert!(discard.is_empty());
    assert_eq!(
        discard.statistics().unwrap_err(),
        DiscardError::EmptyDistribution
    );

    discard.add(card("2C"), 4).unwrap();
    assert_eq!(
        discard.add(card("2C"), 6).unwrap_err(),
        DiscardError::DuplicateFlipCard
    );
    assert_eq!(discard.len(), 1);
    assert_eq!(discard.score_for(&card("2C")), Some(4));
    assert_eq!(discard.score_for(&card("3C")), None);
}

#[test]
fn statistics_of_scores() {
    let stats = Statistics::from_scores(&[8, 4, 2, 4]).unwrap();
    assert_eq!(stats.count, 4);
    assert_eq!(stats.mean, 4.5);
    assert_eq!(stats.median, 4.0);
    assert_eq!(stats.mode, 4);
    assert_eq!(stats.min, 2);
    assert_eq!(stats.max, 8);

    let stats = Statistics::from_scores(&[6, 2, 6, 2, 9]).unwrap();
    assert_eq!(stats.median, 6.0);
    assert_eq!(stats.mode, 2);

    let stats = Statistics::from_scores(&[2, 3, 4, 5]).unwrap();
    assert_eq!(stats.median, 3.5);

    let stats = Statistics::from_scores(&[1, 1, 2]).unwrap();
    assert_eq!(stats.rounded_mean(2), 1.33);
    assert_eq!(stats.rounded_mean(0), 1.0);

    assert_eq!(
        Statistics::from_scores(&[]).unwrap_err(),
        DiscardError::EmptyDistribution
    );
}

#[test]
fn evaluate_scores_every_flip_once_per_pair() {
    for seed in 0..8 {
        let original = deal(seed);
        let rest: HashSet<Card> = remaining(&original).into_iter().collect();
        let discards = evaluate(&original).unwrap();

        assert_eq!(discards.len(), DISCARD_PAIRS);
        for discard in &discards {
            assert_eq!(discard.len(), 46);
            let flips: HashSet<Card> = discard.flips().copied().collect();
            assert_eq!(flips, rest);
        }
    }
}

#[test]
fn evaluate_enumerates_pairs_in_order() {
    let original = parse_cards("4C, 4D, 5C, 6C, KS, QD").unwrap();
    let discards = evaluate(&original).unwrap();

    assert_eq!(discards[0].cards(), [original[0], original[1]]);
    assert_eq!(discards[1].cards(), [original[0], original[2]]);
    assert_eq!(discards[14].cards(), [original[4], original[5]]);

    // Keeping 4C 4D 5C 6C with a 6H flip is the 24 hand.
    assert_eq!(discards[14].score_for(&card("6H")), Some(24));
}

#[test]
fn evaluate_rejects_invalid_deals() {
    let original = parse_cards("8C, AH, 10H, KC, 5D, 2S").unwrap();
    assert_eq!(
        evaluate(&original[..5]).unwrap_err(),
        AdviseError::Input(InputError::WrongCardCount { found: 5 })
    );

    let mut duplicated = original;
    duplicated[5] = duplicated[0];
    assert_eq!(
        evaluate(&duplicated).unwrap_err(),
        AdviseError::Input(InputError::DuplicateCard)
    );
}

#[test]
fn advice_picks_highest_max() {
    let original = parse_cards("5C, 5D, 5S, JH, KS, QD").unwrap();
    let advice = Advisor::default().advise(&original).unwrap();

    assert_eq!(advice.best_max.discard, [card("KS"), card("QD")]);
    assert_eq!(advice.best_max.held, [card("5C"), card("5D"), card("5S"), card("JH")]);
    assert_eq!(advice.best_max.statistics.max, 29);
    assert_eq!(advice.best_max.statistics.count, 46);
}

#[test]
fn advice_breaks_ties_by_enumeration_order() {
    for seed in 0..4 {
        let original = deal(seed);
        let discards = evaluate(&original).unwrap();
        let stats: Vec<Statistics> = discards.iter().map(|d| d.statistics().unwrap()).collect();

        let top_max = stats.iter().map(|s| s.max).max().unwrap();
        let first_max = stats.iter().position(|s| s.max == top_max).unwrap();

        let top_mean = stats.iter().map(|s| s.mean).fold(f64::MIN, f64::max);
        let first_mean = stats.iter().position(|s| s.mean == top_mean).unwrap();

        let advice = Advisor::default().advise(&original).unwrap();
        assert_eq!(advice.best_max.discard, discards[first_max].cards());
        assert_eq!(advice.best_mean.discard, discards[first_mean].cards());
    }
}

#[test]
fn advice_ranks_by_configured_statistic() {
    let original = parse_cards("8C, AH, 10H, KC, 5D, 2S").unwrap();

    let options = AdvisorOptions::default().with_top(DISCARD_PAIRS);
    let advice = Advisor::new(options).advise(&original).unwrap();
    assert_eq!(advice.ranked.len(), DISCARD_PAIRS);
    assert_eq!(advice.ranked[0].statistics.mean, advice.best_mean.statistics.mean);
    assert!(
        advice
            .ranked
            .windows(2)
            .all(|w| w[0].statistics.mean >= w[1].statistics.mean)
    );

    let options = AdvisorOptions::default()
        .with_ranking(Ranking::Min)
        .with_top(5);
    let advice = Advisor::new(options).advise(&original).unwrap();
    assert_eq!(advice.ranked.len(), 5);
    assert!(
        advice
            .ranked
            .windows(2)
            .all(|w| w[0].statistics.min >= w[1].statistics.min)
    );

    let advice = Advisor::new(AdvisorOptions::default().with_top(0))
        .advise(&original)
        .unwrap();
    assert!(advice.ranked.is_empty());
}

#[test]
fn ranking_names() {
    assert_eq!("MAX".parse::<Ranking>(), Ok(Ranking::Max));
    assert_eq!("median".parse::<Ranking>(), Ok(Ranking::Median));
    assert!("average".parse::<Ranking>().is_err());
    assert_eq!(Ranking::Mean.to_string(), "mean");
}

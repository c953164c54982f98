//! Cribbage discard advisor CLI.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cribrs::{Advisor, AdvisorOptions, Card, Ranking, Recommendation, deal, parse_cards};

#[derive(Debug, Parser)]
#[command(about = "Recommends which two cards to discard from a six-card cribbage deal.")]
struct Cli {
    /// Six comma separated cards, e.g. "8C, AH, 10H, KC, 5D, 2S".
    cards: Option<String>,
    /// Deal six random cards from a deck shuffled with this seed.
    #[clap(long, short, conflicts_with = "cards")]
    seed: Option<u64>,
    /// Statistic used to order the ranked table (mean, median, max, min).
    #[clap(long, short, default_value_t = Ranking::Mean)]
    ranking: Ranking,
    /// Number of discard pairs shown in the ranked table, 0 to hide it.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=15))]
    top: u8,
    /// Decimal places used for mean scores.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=6))]
    precision: u8,
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_uppercase())
}

fn read_cards() -> Result<String> {
    println!("Enter 6 cards of format <rank><suit>, separated by commas");
    println!(" <rank> is one of: A, 2...10, J, Q, K");
    println!(" <suit> is one of: S, H, D, C");
    println!("Example: 8C, AH, 10H, KC, 5D, 2S");
    prompt_line("\nYour cards: ")
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_ranked(ranked: &[Recommendation], ranking: Ranking, precision: u8) {
    println!("\nDiscards ranked by {ranking}:");
    println!(
        " {:<10} {:<16} {:>8} {:>6} {:>4} {:>4} {:>4}",
        "discard", "held", "mean", "median", "mode", "min", "max"
    );

    let width = usize::from(precision);
    for rec in ranked {
        let stats = &rec.statistics;
        println!(
            " {:<10} {:<16} {:>8.width$} {:>6.1} {:>4} {:>4} {:>4}",
            format_cards(&rec.discard),
            format_cards(&rec.held),
            stats.rounded_mean(precision),
            stats.median,
            stats.mode,
            stats.min,
            stats.max,
        );
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let cards = match (&cli.cards, cli.seed) {
        (_, Some(seed)) => {
            let cards = deal(seed);
            info!("dealt with seed {seed}");
            println!("Your cards: {}", format_cards(&cards));
            cards
        }
        (Some(text), None) => parse_cards(text).context("invalid card input")?,
        (None, None) => parse_cards(&read_cards()?).context("invalid card input")?,
    };

    let options = AdvisorOptions::default()
        .with_ranking(cli.ranking)
        .with_top(usize::from(cli.top))
        .with_precision(cli.precision);
    let advice = Advisor::new(options).advise(&cards)?;

    let width = usize::from(options.precision);
    let mean = advice.best_mean;
    println!(
        "\nDiscards with the highest average: {}",
        format_cards(&mean.discard)
    );
    println!(
        " (average score: {:.width$})",
        mean.statistics.rounded_mean(options.precision)
    );

    let max = advice.best_max;
    println!(
        "\nDiscards with the highest max score: {}",
        format_cards(&max.discard)
    );
    println!(" (max score: {})", max.statistics.max);

    if !advice.ranked.is_empty() {
        print_ranked(&advice.ranked, options.ranking, options.precision);
    }

    Ok(())
}

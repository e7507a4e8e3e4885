//! Deals a few cards from a seeded deck.
//!
//! Usage: `cargo run --example deal -- [seed] [count]`

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{DeckOptions, SharedDeck};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);

    let deck = SharedDeck::new(DeckOptions::default(), seed);
    println!("Seed {seed}");

    match deck.deal_many(count) {
        Ok(cards) => {
            let dealt: Vec<String> = cards.iter().map(ToString::to_string).collect();
            println!("Dealt: {}", dealt.join(" "));
        }
        Err(err) => println!("Deal error: {err}"),
    }

    if let Ok(card) = deck.random() {
        println!("A random card still in the deck: {card}");
    }

    deck.sort();
    println!("{} cards left, sorted:", deck.cards_left());
    println!("{}", deck.snapshot());
}

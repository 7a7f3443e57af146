//! Generates flashcards from text read on stdin.
//!
//! Run with: `echo "Some text. More text." | cargo run --example from_text`
//!
//! Pass a number as the first argument to seed the generator.

use std::io::Read;

use memorize::{Flashcard, RandomChooser, flashcards_from_text};

fn main() -> std::io::Result<()> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let cards: Vec<Flashcard> = match std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        Some(seed) => flashcards_from_text(&text, &mut RandomChooser::seeded(seed)),
        None => flashcards_from_text(&text, &mut RandomChooser::new()),
    };

    if cards.is_empty() {
        eprintln!("No flashcards could be generated from the input.");
        return Ok(());
    }

    for (i, card) in cards.iter().enumerate() {
        println!("{}. Q: {}", i + 1, card.question);
        println!("   A: {}", card.answer);
    }

    Ok(())
}

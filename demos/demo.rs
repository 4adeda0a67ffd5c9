//! Walk a full game session through every level.
//!
//! Run with: `cargo run --example demo [seed]`
//!
//! This example shows how `math_quiz_gen` is meant to be driven by a game
//! loop:
//!
//! 1. **Level progression**: start at `Level::Basic` and follow
//!    `Level::next()` until it returns `None` after Expert Plus.
//! 2. **Round size**: `QuizRequest::new(level)` uses the default count for the
//!    level (20, or 40 for Expert Plus).
//! 3. **Client payload**: the first question of the last round is printed in
//!    the JSON shape a front end consumes.
//!
//! Pass a seed to get the same session every run. Set `RUST_LOG=debug` (or
//! `trace`) to see the engine's log events.

use math_quiz_gen::{generate_quiz, to_client_question, Level, QuizRequest};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed: Option<u64> = std::env::args().nth(1).and_then(|s| s.parse().ok());

    let mut level = Some(Level::Basic);
    let mut last_round = Vec::new();
    while let Some(current) = level {
        let mut request = QuizRequest::new(current);
        if let Some(seed) = seed {
            request = request.with_seed(seed.wrapping_add(current.number() as u64));
        }
        let round = generate_quiz(request);

        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  Level {}: {}  ({} questions)", current.number(), current, round.len());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for (i, q) in round.iter().enumerate() {
            println!("  {:>2}. {:<22} = {:<8} [{}] {}", i + 1, q.expression, q.answer, q.kind, q.id);
        }
        println!();

        last_round = round;
        level = current.next();
    }

    if let Some(q) = last_round.first() {
        println!("Client payload for the first Expert Plus question:");
        match serde_json::to_string_pretty(&to_client_question(q)) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to render JSON: {e}"),
        }
    }
}

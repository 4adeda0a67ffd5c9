//! # math_quiz_gen
//!
//! An offline math question generator for a same-screen party quiz game.
//!
//! The game shows one expression at a time to a room of players; a moderator
//! reveals the answer and credits whoever called it first. This crate is the
//! part with actual logic: given a difficulty [`Level`], it produces a set of
//! [`Question`]s (expression + exact canonical answer) with level-appropriate
//! operand ranges and operator mix.
//!
//! ## How it works
//!
//! 1. Pick a [`Level`]: `Basic`, `Intermediate`, `Advanced`, `Expert` or
//!    `ExpertPlus`, in that order of difficulty.
//! 2. Call [`generate_set`] (entropy), [`generate_quiz`] (optionally seeded
//!    via [`QuizRequest`]) or [`generate_set_with_rng`] (bring your own RNG).
//! 3. Each level generator picks a pattern (weighted per level), draws
//!    operands, and builds the answer exactly: divisions are derived from
//!    their quotient, roots from their root, and decimals are computed in
//!    hundredths/tenths so nothing is ever off by floating-point noise.
//!
//! ## Answer format
//!
//! - Integers render plainly: `"18"`, `"-899"`.
//! - Fractions render as `"num/den"`; Expert Plus reduces to lowest terms,
//!   Intermediate keeps the raw like-denominator sum (`"6/4"`).
//! - Decimals keep their fixed precision but drop an all-zero fraction:
//!   `"3.35"`, `"2.70"`, `"5"`.
//!
//! ## Quick start
//!
//! ```rust
//! use math_quiz_gen::{generate_quiz, generate_set, Level, QuizRequest};
//!
//! // A full round at the default size for the level (20, or 40 for Expert Plus):
//! let round = generate_quiz(QuizRequest::new(Level::Basic));
//! assert_eq!(round.len(), 20);
//!
//! // Reproducible set: same seed, same questions:
//! let a = generate_quiz(QuizRequest::new(Level::ExpertPlus).with_count(5).with_seed(42));
//! let b = generate_quiz(QuizRequest::new(Level::ExpertPlus).with_count(5).with_seed(42));
//! assert_eq!(a, b);
//!
//! for q in generate_set(Level::Advanced, 3) {
//!     println!("{} = {}", q.expression, q.answer);
//! }
//!
//! // Walk the levels the way a game session does:
//! let mut level = Some(Level::Basic);
//! while let Some(current) = level {
//!     let _ = generate_set(current, 1);
//!     level = current.next();
//! }
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `math_quiz_gen::generate_set`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_one, generate_quiz, generate_set, generate_set_with_rng,
    to_client_question, to_client_set, Level, Question, QuestionKind,
    QuizError, QuizRequest, Result,
};

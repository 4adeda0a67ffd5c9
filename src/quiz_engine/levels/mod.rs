//! Level generators, one module per difficulty tier.
//!
//! Every module exposes the same entry point:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

/// Single operations on small numbers: add, multiply, subtract, exact divide.
pub mod basic;
/// Two-digit operations and like-denominator fraction sums.
pub mod intermediate;
/// Parenthesised multi-step expressions.
pub mod advanced;
/// Three-digit addition/subtraction and larger products.
pub mod expert;
/// Six problem families: 3-digit, fraction sum, decimal, root, power, mixed.
pub mod expert_plus;

//! Shared builder functions used by every level generator.
//!
//! Level files pick operands and compute answers; the helpers here take care
//! of the repetitive parts (choosing from fixed tables, formatting binary
//! expressions, assembling the final [`Question`]).

use rand::Rng;
use crate::quiz_engine::models::{Level, Question, QuestionKind};

/// Pick one element uniformly from a non-empty table.
///
/// All tables passed in are compile-time constants, so they are never empty.
pub fn pick<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Format `a op b` with single spaces (e.g. `"15 + 3"`).
pub fn binary(a: impl std::fmt::Display, op: &str, b: impl std::fmt::Display) -> String {
    format!("{a} {op} {b}")
}

/// Build a division that always comes out whole by deriving the dividend
/// from the divisor and the wanted quotient. Returns `(expression, quotient)`.
pub fn exact_division(divisor: i64, quotient: i64) -> (String, i64) {
    (binary(divisor * quotient, "÷", divisor), quotient)
}

/// Assemble the final [`Question`].
///
/// `pattern` is the branch name within the level; it is prefixed with the
/// level tag so keys are unique across the whole engine.
pub fn question(
    id: String, level: Level, kind: QuestionKind, pattern: &str,
    expression: String, answer: impl Into<String>,
) -> Question {
    Question {
        id,
        expression,
        answer: answer.into(),
        level,
        kind,
        pattern: format!("{:?}:{}", level, pattern),
    }
}

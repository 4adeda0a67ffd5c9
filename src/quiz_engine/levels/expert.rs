use rand::Rng;
use crate::quiz_engine::{
    helpers::{binary, question},
    models::{Level, Question, QuestionKind},
};

/// Expert level: three-digit addition and subtraction, and two-digit by
/// one/two-digit multiplication.
pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question {
    let (pattern, expression, answer) = match rng.gen_range(0..3) {
        0 => {
            let a = rng.gen_range(100..=999i64);
            let b = rng.gen_range(100..=999i64);
            ("Addition", binary(a, "+", b), a + b)
        }
        1 => {
            // Minuend floor (500) sits above the subtrahend ceiling (499).
            let a = rng.gen_range(500..=1399i64);
            let b = rng.gen_range(100..=499i64);
            ("Subtraction", binary(a, "-", b), a - b)
        }
        _ => {
            let a = rng.gen_range(10..=109i64);
            let b = rng.gen_range(2..=21i64);
            ("Multiplication", binary(a, "×", b), a * b)
        }
    };

    question(
        question_id, Level::Expert, QuestionKind::Simple, pattern,
        expression, answer.to_string(),
    )
}

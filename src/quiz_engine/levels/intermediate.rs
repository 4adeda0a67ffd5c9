use rand::Rng;
use crate::quiz_engine::{
    helpers::{binary, exact_division, pick, question},
    models::{Level, Question, QuestionKind},
    numeric::Fraction,
};

const DENOMINATORS: [i64; 5] = [2, 3, 4, 5, 10];

/// Sum of two fractions over the same denominator.
///
/// The answer collapses to a whole number when it divides evenly but is
/// otherwise left unreduced (`3/4 + 3/4` → `6/4`). Expert Plus reduces;
/// this level deliberately does not.
pub(crate) fn like_fraction_sum(n1: i64, n2: i64, den: i64) -> (String, String) {
    let sum = n1 + n2;
    let answer = if sum % den == 0 {
        (sum / den).to_string()
    } else {
        Fraction::new(sum, den).to_string()
    };
    (format!("{n1}/{den} + {n2}/{den}"), answer)
}

/// Intermediate level: one in four questions is a like-denominator fraction
/// sum, the rest are the four operations on two-digit numbers.
pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question {
    if rng.gen_bool(0.25) {
        let den = pick(rng, &DENOMINATORS);
        let n1 = rng.gen_range(1..den);
        let n2 = rng.gen_range(1..den);
        let (expression, answer) = like_fraction_sum(n1, n2, den);
        return question(
            question_id, Level::Intermediate, QuestionKind::Fraction, "FractionSum",
            expression, answer,
        );
    }

    let (pattern, expression, answer) = match rng.gen_range(0..4) {
        0 => {
            let a = rng.gen_range(1..=50i64);
            let b = rng.gen_range(1..=50i64);
            ("Addition", binary(a, "+", b), a + b)
        }
        1 => {
            // Independent draws; the ranges only meet at 50 - 50.
            let a = rng.gen_range(50..=99i64);
            let b = rng.gen_range(1..=50i64);
            ("Subtraction", binary(a, "-", b), a - b)
        }
        2 => {
            let a = rng.gen_range(2..=13i64);
            let b = rng.gen_range(2..=13i64);
            ("Multiplication", binary(a, "×", b), a * b)
        }
        _ => {
            let divisor = rng.gen_range(2..=13i64);
            let quotient = rng.gen_range(1..=12i64);
            let (expression, answer) = exact_division(divisor, quotient);
            ("Division", expression, answer)
        }
    };

    question(
        question_id, Level::Intermediate, QuestionKind::Simple, pattern,
        expression, answer.to_string(),
    )
}

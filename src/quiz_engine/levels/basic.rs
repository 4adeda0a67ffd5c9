use rand::Rng;
use crate::quiz_engine::{
    helpers::{binary, exact_division, question},
    models::{Level, Question, QuestionKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Multiply,
    Subtract,
    Divide,
}

impl Op {
    fn key(self) -> &'static str {
        match self {
            Op::Add      => "Addition",
            Op::Multiply => "Multiplication",
            Op::Subtract => "Subtraction",
            Op::Divide   => "Division",
        }
    }
}

/// Basic level: mostly addition and times tables, occasionally a
/// subtraction or an exact division.
pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question {
    // 80% add/multiply, 20% subtract/divide, uniform within each group.
    let harder = rng.gen_bool(0.2);
    let op = match (harder, rng.gen_bool(0.5)) {
        (false, true)  => Op::Add,
        (false, false) => Op::Multiply,
        (true, true)   => Op::Subtract,
        (true, false)  => Op::Divide,
    };

    let (expression, answer) = match op {
        Op::Add => {
            let a = rng.gen_range(1..=20i64);
            let b = rng.gen_range(1..=20i64);
            (binary(a, "+", b), a + b)
        }
        Op::Multiply => {
            let a = rng.gen_range(1..=10i64);
            let b = rng.gen_range(1..=10i64);
            (binary(a, "x", b), a * b)
        }
        Op::Subtract => {
            // Subtrahend never exceeds the minuend, so the result is >= 0.
            let a = rng.gen_range(10..=29i64);
            let b = rng.gen_range(1..=a);
            (binary(a, "-", b), a - b)
        }
        Op::Divide => {
            let divisor = rng.gen_range(2..=10i64);
            let quotient = rng.gen_range(1..=10i64);
            exact_division(divisor, quotient)
        }
    };

    question(question_id, Level::Basic, QuestionKind::Simple, op.key(), expression, answer.to_string())
}

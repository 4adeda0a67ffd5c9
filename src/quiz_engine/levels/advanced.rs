use rand::Rng;
use crate::quiz_engine::{
    helpers::question,
    models::{Level, Question, QuestionKind},
};

/// Which multi-step pattern the question follows.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    ProductPlus,   // (a × b) + c
    MinusProduct,  // a - (b × c)
    TripleProduct, // a × b × c
}

/// Advanced level: small multi-operation expressions, parenthesised so the
/// evaluation order is unambiguous.
pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question {
    let pattern = match rng.gen_range(0..3) {
        0 => Pattern::ProductPlus,
        1 => Pattern::MinusProduct,
        _ => Pattern::TripleProduct,
    };

    let (key, expression, answer) = match pattern {
        Pattern::ProductPlus => {
            let a = rng.gen_range(2..=11i64);
            let b = rng.gen_range(2..=11i64);
            let c = rng.gen_range(1..=20i64);
            ("ProductPlus", format!("({a} × {b}) + {c}"), a * b + c)
        }
        Pattern::MinusProduct => {
            let a = rng.gen_range(10..=39i64);
            let b = rng.gen_range(2..=6i64);
            let c = rng.gen_range(1..=10i64);
            ("MinusProduct", format!("{a} - ({b} × {c})"), a - b * c)
        }
        Pattern::TripleProduct => {
            let a = rng.gen_range(2..=6i64);
            let b = rng.gen_range(2..=6i64);
            let c = rng.gen_range(2..=6i64);
            ("TripleProduct", format!("{a} × {b} × {c}"), a * b * c)
        }
    };

    question(
        question_id, Level::Advanced, QuestionKind::Expression, key,
        expression, answer.to_string(),
    )
}

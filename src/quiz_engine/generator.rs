use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::quiz_engine::{
    levels,
    models::{Level, Question, QuizRequest},
};

/// Generate a question ID from level prefix + random suffix.
fn make_question_id(level: Level, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", level.id_prefix(), rng.next_u32())
}

/// Core dispatch: routes to the generator for `level`.
pub fn generate_one<R: Rng>(rng: &mut R, level: Level) -> Question {
    let question_id = make_question_id(level, rng);

    let question = match level {
        Level::Basic        => levels::basic::generate(rng, question_id),
        Level::Intermediate => levels::intermediate::generate(rng, question_id),
        Level::Advanced     => levels::advanced::generate(rng, question_id),
        Level::Expert       => levels::expert::generate(rng, question_id),
        Level::ExpertPlus   => levels::expert_plus::generate(rng, question_id),
    };

    trace!(id = %question.id, pattern = %question.pattern, "generated question");
    question
}

/// Generate exactly `count` independent questions at `level` from `rng`.
pub fn generate_set_with_rng<R: Rng>(rng: &mut R, level: Level, count: usize) -> Vec<Question> {
    debug!(%level, count, "generating question set");
    (0..count).map(|_| generate_one(rng, level)).collect()
}

/// Generate exactly `count` questions at `level` using an entropy-seeded RNG.
///
/// Two calls with the same arguments are not expected to agree; use
/// [`generate_quiz`] with a seed when reproducibility matters.
pub fn generate_set(level: Level, count: usize) -> Vec<Question> {
    let mut rng = StdRng::from_entropy();
    generate_set_with_rng(&mut rng, level, count)
}

/// Generate the question set described by `request`.
pub fn generate_quiz(request: QuizRequest) -> Vec<Question> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_set_with_rng(&mut rng, request.level, request.count)
}

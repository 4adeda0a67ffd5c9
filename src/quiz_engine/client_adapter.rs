use serde_json::{json, Value};
use crate::quiz_engine::models::Question;

/// Convert a `Question` to the record shape the game front end renders:
/// numeric level (1-5) and the answer shape under `type`.
pub fn to_client_question(q: &Question) -> Value {
    json!({
        "id": q.id,
        "expression": q.expression,
        "answer": q.answer,
        "level": q.level.number(),
        "type": q.kind,
    })
}

/// Convert a whole question set, preserving order.
pub fn to_client_set(questions: &[Question]) -> Value {
    Value::Array(questions.iter().map(to_client_question).collect())
}

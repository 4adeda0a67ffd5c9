//! Core quiz engine: question generation and answer formatting.
//!
//! ## Module overview
//!
//! | Module           | Purpose |
//! |------------------|---------|
//! | `models`         | Shared types: levels, questions, the request struct |
//! | `error`          | `QuizError` for invalid level tags |
//! | `numeric`        | GCD, fractions, fixed-point decimal formatting |
//! | `helpers`        | Builders shared by every level generator |
//! | `generator`      | Entry points `generate_set()` / `generate_quiz()`, dispatch to levels |
//! | `levels`         | One generator per difficulty level |
//! | `client_adapter` | JSON records in the shape the game front end consumes |

pub mod client_adapter;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod levels;
pub mod models;
pub mod numeric;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_set` without reaching into sub-modules.
pub use client_adapter::{to_client_question, to_client_set};
pub use error::{QuizError, Result};
pub use generator::{generate_one, generate_quiz, generate_set, generate_set_with_rng};
pub use models::{Level, Question, QuestionKind, QuizRequest};

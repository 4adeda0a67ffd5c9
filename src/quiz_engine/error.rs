/// Alias used wherever an untyped level tag crosses into the engine.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised when converting caller input into engine types.
///
/// Generation itself is infallible: once a [`Level`](super::Level) exists,
/// every generator produces a valid question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("invalid level number {0} (expected 1-5)")]
    InvalidLevel(u8),

    #[error("unknown level '{0}'")]
    UnknownLevel(String),
}

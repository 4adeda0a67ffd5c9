use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::{QuizError, Result};

// ---------------------------------------------------------------------------
// Difficulty levels
// ---------------------------------------------------------------------------

/// Difficulty tier, ordered from easiest to hardest.
///
/// A game loop walks these in declaration order; `ExpertPlus` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
    Expert,
    ExpertPlus,
}

impl Level {
    /// All levels in ascending difficulty.
    pub const ALL: [Level; 5] = [
        Level::Basic,
        Level::Intermediate,
        Level::Advanced,
        Level::Expert,
        Level::ExpertPlus,
    ];

    /// Ordinal number, 1 for Basic through 5 for Expert Plus.
    pub fn number(self) -> u8 {
        match self {
            Level::Basic        => 1,
            Level::Intermediate => 2,
            Level::Advanced     => 3,
            Level::Expert       => 4,
            Level::ExpertPlus   => 5,
        }
    }

    /// The level a game advances to after this one, `None` after Expert Plus.
    pub fn next(self) -> Option<Level> {
        match self {
            Level::Basic        => Some(Level::Intermediate),
            Level::Intermediate => Some(Level::Advanced),
            Level::Advanced     => Some(Level::Expert),
            Level::Expert       => Some(Level::ExpertPlus),
            Level::ExpertPlus   => None,
        }
    }

    /// How many questions a round at this level normally holds.
    ///
    /// This is the default used by [`QuizRequest::new`]; callers are free to
    /// ask for any other count.
    pub fn default_question_count(self) -> usize {
        match self {
            Level::ExpertPlus => 40,
            _ => 20,
        }
    }

    /// Short tag used as the question ID prefix.
    pub(crate) fn id_prefix(self) -> &'static str {
        match self {
            Level::Basic        => "BA",
            Level::Intermediate => "IN",
            Level::Advanced     => "AD",
            Level::Expert       => "EX",
            Level::ExpertPlus   => "XP",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Basic        => "Basic",
            Level::Intermediate => "Intermediate",
            Level::Advanced     => "Advanced",
            Level::Expert       => "Expert",
            Level::ExpertPlus   => "Expert Plus",
        };
        write!(f, "{}", s)
    }
}

impl TryFrom<u8> for Level {
    type Error = QuizError;

    fn try_from(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Level::Basic),
            2 => Ok(Level::Intermediate),
            3 => Ok(Level::Advanced),
            4 => Ok(Level::Expert),
            5 => Ok(Level::ExpertPlus),
            other => Err(QuizError::InvalidLevel(other)),
        }
    }
}

impl FromStr for Level {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "basic" | "1"        => Ok(Level::Basic),
            "intermediate" | "2" => Ok(Level::Intermediate),
            "advanced" | "3"     => Ok(Level::Advanced),
            "expert" | "4"       => Ok(Level::Expert),
            "expertplus" | "expert-plus" | "expert_plus" | "expert plus" | "5" => {
                Ok(Level::ExpertPlus)
            }
            _ => Err(QuizError::UnknownLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// Shape of a question's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// A single operation with a plain numeric answer.
    Simple,
    /// The answer is written as a fraction.
    Fraction,
    /// Several operations combined in one expression.
    Expression,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Simple     => write!(f, "simple"),
            QuestionKind::Fraction   => write!(f, "fraction"),
            QuestionKind::Expression => write!(f, "expression"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// Human-readable expression, parenthesised wherever precedence matters.
    pub expression: String,
    /// Canonical exact answer: integer, `num/den`, or a trimmed decimal.
    pub answer: String,
    pub level: Level,
    pub kind: QuestionKind,
    /// Which generator branch produced this question, e.g. `"ExpertPlus:SquareRoot"`.
    /// Stable across seeds; use it for per-pattern coverage tracking.
    pub pattern: String,
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub level: Level,
    pub count: usize,
    /// `Some(seed)` reproduces the exact same question set; `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    /// Request a full round at `level`: default question count, entropy seed.
    pub fn new(level: Level) -> Self {
        QuizRequest {
            level,
            count: level.default_question_count(),
            rng_seed: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

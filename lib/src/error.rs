use thiserror::Error;

pub const GENERATION_FALLBACK: &str = "Failed to generate quiz";
pub const HISTORY_FALLBACK: &str = "Failed to fetch history";

/// Failures surfaced by [`QuizClient`](crate::QuizClient).
///
/// The display text is exactly what the user should see: either the
/// service-provided detail or the fixed fallback for the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("{0}")]
    Generation(String),

    #[error("{0}")]
    History(String),

    #[error("{0}")]
    Setup(String),
}

impl ClientError {
    pub(crate) fn setup(cause: impl std::fmt::Display) -> Self {
        Self::Setup(format!("Invalid client configuration: {cause}"))
    }

    /// The text to show the user; identical to the `Display` output.
    pub fn message(&self) -> &str {
        match self {
            Self::Generation(message) | Self::History(message) | Self::Setup(message) => message,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("No quiz questions available.")]
    NoQuestions,

    #[error("question {index} is out of range (quiz has {count} questions)")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("option {option} is out of range for question {question} ({count} options)")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        count: usize,
    },
}

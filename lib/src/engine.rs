use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::data::{Question, QuizRecord};
use crate::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.correct, self.total)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Unanswered,
    InProgress,
    Submitted(Score),
}

/// How an option should be presented for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Unmarked,
    Selected,
    /// Revealed after submission for every option flagged correct.
    Correct,
    /// Revealed after submission for a selected option that is not correct.
    Wrong,
}

/// One interactive attempt at a quiz.
///
/// The session owns the answer map (question index to option index) and
/// reads the questions from a shared, immutable record.
#[derive(Clone, Debug)]
pub struct QuizSession {
    record: Arc<QuizRecord>,
    answers: BTreeMap<usize, usize>,
    state: SessionState,
}

impl QuizSession {
    pub fn new(record: Arc<QuizRecord>) -> Result<Self, EngineError> {
        if record.questions().is_empty() {
            return Err(EngineError::NoQuestions);
        }

        Ok(Self {
            record,
            answers: BTreeMap::new(),
            state: SessionState::Unanswered,
        })
    }

    pub fn record(&self) -> &QuizRecord {
        &self.record
    }

    pub fn questions(&self) -> &[Question] {
        self.record.questions()
    }

    pub fn question_count(&self) -> usize {
        self.questions().len()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, SessionState::Submitted(_))
    }

    pub fn score(&self) -> Option<Score> {
        match self.state {
            SessionState::Submitted(score) => Some(score),
            _ => None,
        }
    }

    pub fn selected(&self, question_index: usize) -> Option<usize> {
        self.answers.get(&question_index).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.question_count()
    }

    /// Records `option_index` as the answer to `question_index`, replacing
    /// any earlier choice.
    ///
    /// Once submitted the answers are frozen and every call is ignored.
    /// Indices outside the quiz are rejected without touching the answers.
    pub fn select_answer(
        &mut self,
        question_index: usize,
        option_index: usize,
    ) -> Result<(), EngineError> {
        if self.is_submitted() {
            tracing::debug!(question_index, option_index, "Ignoring selection after submit");
            return Ok(());
        }

        let question = self.questions().get(question_index).ok_or(
            EngineError::QuestionOutOfRange {
                index: question_index,
                count: self.question_count(),
            },
        )?;

        if option_index >= question.options.len() {
            return Err(EngineError::OptionOutOfRange {
                question: question_index,
                option: option_index,
                count: question.options.len(),
            });
        }

        self.answers.insert(question_index, option_index);
        self.state = SessionState::InProgress;

        Ok(())
    }

    /// Scores the session and freezes its answers. Unanswered questions
    /// count as incorrect. Calling it again returns the first score.
    pub fn submit(&mut self) -> Score {
        if let SessionState::Submitted(score) = self.state {
            return score;
        }

        let correct = self
            .questions()
            .iter()
            .enumerate()
            .filter(|(index, question)| {
                self.selected(*index)
                    .map_or(false, |option| question.is_correct_choice(option))
            })
            .count();
        let score = Score {
            correct,
            total: self.question_count(),
        };

        tracing::debug!(%score, answered = self.answered_count(), "Quiz submitted");
        self.state = SessionState::Submitted(score);

        score
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.state = SessionState::Unanswered;
    }

    /// The explanation for a question, available only after submission.
    pub fn explanation(&self, question_index: usize) -> Option<&str> {
        if !self.is_submitted() {
            return None;
        }

        self.questions()
            .get(question_index)
            .and_then(|question| question.explanation.as_deref())
    }

    pub fn option_mark(&self, question_index: usize, option_index: usize) -> OptionMark {
        let Some(question) = self.questions().get(question_index) else {
            return OptionMark::Unmarked;
        };
        let is_selected = self.selected(question_index) == Some(option_index);

        if !self.is_submitted() {
            return if is_selected {
                OptionMark::Selected
            } else {
                OptionMark::Unmarked
            };
        }

        match (question.is_correct_choice(option_index), is_selected) {
            (true, _) => OptionMark::Correct,
            (false, true) => OptionMark::Wrong,
            (false, false) => OptionMark::Unmarked,
        }
    }
}

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::raw_data::{RawKeyEntity, RawQuestion, RawQuizOption, RawQuizPayload, RawQuizRecord};

const WIKIPEDIA_ARTICLE_BASE: &str = "https://en.wikipedia.org/wiki/";

/// One generated quiz as returned by the generation service.
///
/// Records are never mutated once received; sessions and views share them
/// behind an `Arc`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "RawQuizRecord", into = "RawQuizRecord")]
pub struct QuizRecord {
    pub id: Option<i64>,
    pub url: Option<String>,

    pub title: String,
    pub data: QuizPayload,

    pub created_at: Option<NaiveDateTime>,
}

impl QuizRecord {
    pub fn new(title: String, data: QuizPayload) -> Self {
        Self {
            id: None,
            url: None,
            title,
            data,
            created_at: None,
        }
    }

    pub fn from_slice(raw_data: &[u8]) -> serde_json::Result<Self> {
        let raw_record: RawQuizRecord = serde_json::from_slice(raw_data)?;

        Ok(raw_record.into())
    }

    pub fn list_from_slice(raw_data: &[u8]) -> serde_json::Result<Vec<Self>> {
        let raw_records: Vec<RawQuizRecord> = serde_json::from_slice(raw_data)?;

        Ok(raw_records.into_iter().map(Into::into).collect())
    }

    pub fn questions(&self) -> &[Question] {
        &self.data.quiz_questions
    }
}

impl From<RawQuizRecord> for QuizRecord {
    fn from(raw: RawQuizRecord) -> Self {
        Self {
            id: raw.id,
            url: raw.url,
            title: raw.title,
            data: raw.data.unwrap_or_default().into(),
            created_at: raw.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Accepts RFC 3339 timestamps (converted to UTC) as well as the naive
/// ISO form the service usually sends. Anything else is dropped.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_utc());
    }

    raw.parse::<NaiveDateTime>()
        .map_err(|err| tracing::debug!(raw, error = %err, "Ignoring unparseable created_at"))
        .ok()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizPayload {
    pub summary: Option<String>,
    pub key_entities: Vec<KeyEntity>,
    /// Order is significant: positions are the question indices used by a
    /// taking session.
    pub quiz_questions: Vec<Question>,
    pub related_topics: Vec<String>,
}

impl QuizPayload {
    pub fn question_count(&self) -> usize {
        self.quiz_questions.len()
    }
}

impl From<RawQuizPayload> for QuizPayload {
    fn from(raw: RawQuizPayload) -> Self {
        Self {
            summary: raw.summary.filter(|summary| !summary.trim().is_empty()),
            key_entities: raw
                .key_entities
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            quiz_questions: raw
                .quiz_questions
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            related_topics: raw.related_topics.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEntity {
    pub name: String,
    pub kind: String,
    pub description: String,
}

impl From<RawKeyEntity> for KeyEntity {
    fn from(raw: RawKeyEntity) -> Self {
        Self {
            name: raw.name,
            kind: raw.kind,
            description: raw.description,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub question: String,
    pub options: Vec<QuizOption>,
    pub difficulty: Difficulty,
    pub explanation: Option<String>,
}

impl Question {
    pub fn new(question: String, options: Vec<QuizOption>) -> Self {
        Self {
            question,
            options,
            difficulty: Difficulty::default(),
            explanation: None,
        }
    }

    pub fn correct_options(&self) -> impl Iterator<Item = usize> + '_ {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.is_correct)
            .map(|(index, _)| index)
    }

    /// Whether picking `option_index` answers this question correctly.
    ///
    /// Any option flagged correct counts, so questions with several correct
    /// options accept each of them and questions with none accept nothing.
    pub fn is_correct_choice(&self, option_index: usize) -> bool {
        self.options
            .get(option_index)
            .map_or(false, |option| option.is_correct)
    }
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        Self {
            question: raw.question,
            options: raw.options.into_iter().map(Into::into).collect(),
            difficulty: raw.difficulty.into(),
            explanation: raw
                .explanation
                .filter(|explanation| !explanation.trim().is_empty()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
}

impl QuizOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

impl From<RawQuizOption> for QuizOption {
    fn from(raw: RawQuizOption) -> Self {
        Self {
            text: raw.text,
            is_correct: raw.is_correct.unwrap_or(false),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn related_topic_url(topic: &str) -> String {
    format!("{WIKIPEDIA_ARTICLE_BASE}{}", topic.replace(' ', "_"))
}

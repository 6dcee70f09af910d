use serde::{Deserialize, Serialize};

use crate::data::{Difficulty, KeyEntity, Question, QuizOption, QuizPayload, QuizRecord};

#[derive(Serialize, Deserialize, Debug)]
pub struct RawQuizRecord {
    pub id: Option<i64>,
    pub url: Option<String>,

    pub title: String,
    pub data: Option<RawQuizPayload>,
    pub created_at: Option<String>,
}

impl From<QuizRecord> for RawQuizRecord {
    fn from(data: QuizRecord) -> Self {
        Self {
            id: data.id,
            url: data.url,
            title: data.title,
            data: Some(data.data.into()),
            created_at: data
                .created_at
                .map(|created_at| created_at.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct RawQuizPayload {
    pub summary: Option<String>,
    pub key_entities: Option<Vec<RawKeyEntity>>,
    pub quiz_questions: Option<Vec<RawQuestion>>,
    pub related_topics: Option<Vec<String>>,
}

impl From<QuizPayload> for RawQuizPayload {
    fn from(data: QuizPayload) -> Self {
        Self {
            summary: data.summary,
            key_entities: Some(data.key_entities.into_iter().map(Into::into).collect()),
            quiz_questions: Some(data.quiz_questions.into_iter().map(Into::into).collect()),
            related_topics: Some(data.related_topics),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RawKeyEntity {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

impl From<KeyEntity> for RawKeyEntity {
    fn from(data: KeyEntity) -> Self {
        Self {
            name: data.name,
            kind: data.kind,
            description: data.description,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RawQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<RawQuizOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl From<Question> for RawQuestion {
    fn from(data: Question) -> Self {
        Self {
            question: data.question,
            options: data.options.into_iter().map(Into::into).collect(),
            difficulty: Some(data.difficulty.as_str().to_owned()),
            explanation: data.explanation,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RawQuizOption {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
}

impl From<QuizOption> for RawQuizOption {
    fn from(data: QuizOption) -> Self {
        Self {
            text: data.text,
            is_correct: Some(data.is_correct),
        }
    }
}

impl From<Option<String>> for Difficulty {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("easy") => Self::Easy,
            Some(value) if value.eq_ignore_ascii_case("hard") => Self::Hard,
            _ => Self::Medium,
        }
    }
}

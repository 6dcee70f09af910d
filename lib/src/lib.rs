mod client;
mod data;
mod engine;
mod error;
mod helpers;
mod raw_data;
mod request;
mod view;

pub use client::{ApiUrl, Config, QuizClient, DEFAULT_TIMEOUT};
pub use data::{
    related_topic_url, Difficulty, KeyEntity, Question, QuizOption, QuizPayload, QuizRecord,
};
pub use engine::{OptionMark, QuizSession, Score, SessionState};
pub use error::{ClientError, EngineError, GENERATION_FALLBACK, HISTORY_FALLBACK};
pub use helpers::extract_detail;
pub use request::{RequestToken, RequestTracker};
pub use view::{App, GenerateView, HistoryView, Tab, ViewMode, EMPTY_URL_MESSAGE};

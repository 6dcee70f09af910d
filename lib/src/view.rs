use std::sync::Arc;

use crate::data::QuizRecord;
use crate::error::ClientError;
use crate::request::{RequestToken, RequestTracker};

pub const EMPTY_URL_MESSAGE: &str = "Please enter a Wikipedia URL";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Generate,
    History,
}

/// Whether a record is shown read-only or taken as a quiz.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Display,
    Take,
}

#[derive(Debug, Default)]
pub struct GenerateView {
    pub url: String,
    loading: bool,
    error: Option<String>,
    record: Option<Arc<QuizRecord>>,
    pub view_mode: ViewMode,
    requests: RequestTracker,
}

impl GenerateView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn record(&self) -> Option<&Arc<QuizRecord>> {
        self.record.as_ref()
    }

    /// Starts a generation for `url`. Blank input is rejected up front and no
    /// request should be sent.
    pub fn begin(&mut self, url: impl Into<String>) -> Option<RequestToken> {
        self.url = url.into();

        if self.url.trim().is_empty() {
            self.error = Some(EMPTY_URL_MESSAGE.to_owned());
            return None;
        }

        self.loading = true;
        self.error = None;
        self.record = None;

        Some(self.requests.issue())
    }

    /// Applies a generation response. Responses to anything but the latest
    /// request are dropped; returns whether this one was applied.
    pub fn finish(
        &mut self,
        token: RequestToken,
        result: Result<QuizRecord, ClientError>,
    ) -> bool {
        if !self.requests.is_current(token) {
            tracing::debug!(token = token.value(), "Discarding stale generation response");
            return false;
        }

        match result {
            Ok(record) => {
                self.record = Some(Arc::new(record));
                self.error = None;
                self.view_mode = ViewMode::Display;
            }
            Err(err) => self.error = Some(err.message().to_owned()),
        }
        self.loading = false;

        true
    }
}

#[derive(Debug, Default)]
pub struct HistoryView {
    records: Vec<Arc<QuizRecord>>,
    loading: bool,
    error: Option<String>,
    selected: Option<Arc<QuizRecord>>,
    pub view_mode: ViewMode,
    requests: RequestTracker,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Arc<QuizRecord>] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&Arc<QuizRecord>> {
        self.selected.as_ref()
    }

    pub fn begin(&mut self) -> RequestToken {
        self.loading = true;
        self.error = None;

        self.requests.issue()
    }

    pub fn finish(
        &mut self,
        token: RequestToken,
        result: Result<Vec<QuizRecord>, ClientError>,
    ) -> bool {
        if !self.requests.is_current(token) {
            tracing::debug!(token = token.value(), "Discarding stale history response");
            return false;
        }

        match result {
            Ok(records) => self.records = records.into_iter().map(Arc::new).collect(),
            Err(err) => self.error = Some(err.message().to_owned()),
        }
        self.loading = false;

        true
    }

    /// Opens the record at `index` of the listing, starting in display mode.
    pub fn open(&mut self, index: usize) -> Option<&Arc<QuizRecord>> {
        let record = self.records.get(index)?.clone();

        self.selected = Some(record);
        self.view_mode = ViewMode::Display;

        self.selected.as_ref()
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}

#[derive(Debug, Default)]
pub struct App {
    pub tab: Tab,
    pub generate: GenerateView,
    pub history: HistoryView,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }
}

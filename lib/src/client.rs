use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::data::QuizRecord;
use crate::error::{ClientError, GENERATION_FALLBACK, HISTORY_FALLBACK};
use crate::helpers::failure_message;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: ApiUrl,
    pub timeout: Duration,
}

impl Config {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: ApiUrl::new(base_url),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiUrl {
    url: Url,
}

impl ApiUrl {
    pub fn new(mut url: Url) -> Self {
        // `Url::join` replaces the last segment unless the path ends in a slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Self { url }
    }

    pub fn base(&self) -> &Url {
        &self.url
    }

    pub fn generate(&self) -> Result<Url, url::ParseError> {
        self.url.join("generate")
    }

    pub fn history(&self) -> Result<Url, url::ParseError> {
        self.url.join("history")
    }
}

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
    url: &'a str,
}

/// Client for the remote quiz generation service.
///
/// Every call is exactly one round trip. Nothing is retried or cached; the
/// caller decides whether to try again.
#[derive(Debug, Clone)]
pub struct QuizClient {
    config: Config,
    http_client: reqwest::Client,
}

impl QuizClient {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::setup)?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn generate(&self, url: &str) -> Result<QuizRecord, ClientError> {
        let endpoint = self
            .config
            .base_url
            .generate()
            .map_err(|err| setup_failure(err, GENERATION_FALLBACK, ClientError::Generation))?;
        let request = self
            .http_client
            .request(Method::POST, endpoint)
            .json(&GenerateRequest { url });

        let body = execute(&self.http_client, request, GENERATION_FALLBACK)
            .await
            .map_err(ClientError::Generation)?;

        QuizRecord::from_slice(&body).map_err(|err| {
            tracing::warn!(error = %err, "Generation response could not be decoded");
            ClientError::Generation(GENERATION_FALLBACK.to_owned())
        })
    }

    pub async fn history(&self) -> Result<Vec<QuizRecord>, ClientError> {
        let endpoint = self
            .config
            .base_url
            .history()
            .map_err(|err| setup_failure(err, HISTORY_FALLBACK, ClientError::History))?;
        let request = self.http_client.request(Method::GET, endpoint);

        let body = execute(&self.http_client, request, HISTORY_FALLBACK)
            .await
            .map_err(ClientError::History)?;

        QuizRecord::list_from_slice(&body).map_err(|err| {
            tracing::warn!(error = %err, "History response could not be decoded");
            ClientError::History(HISTORY_FALLBACK.to_owned())
        })
    }
}

fn setup_failure(
    err: url::ParseError,
    fallback: &str,
    wrap: fn(String) -> ClientError,
) -> ClientError {
    tracing::warn!(error = %err, "Could not build endpoint URL");
    wrap(fallback.to_owned())
}

/// Sends the request and returns the success body, or the user-facing
/// failure message.
async fn execute(
    http_client: &reqwest::Client,
    request: RequestBuilder,
    fallback: &str,
) -> Result<Vec<u8>, String> {
    let request = request.build().map_err(|err| {
        tracing::warn!(error = %err, "Could not build quiz API request");
        fallback.to_owned()
    })?;
    let method = request.method().clone();
    let url = request.url().clone();

    tracing::debug!(%method, %url, "Sending quiz API request");

    let response = http_client
        .execute(request)
        .await
        .map_err(|err| {
            tracing::warn!(
                %method,
                %url,
                error = %err,
                timeout = err.is_timeout(),
                "Quiz API request failed"
            );
            fallback.to_owned()
        })?;

    let status = response.status();
    let body = response.bytes().await.map_err(|err| {
        tracing::warn!(%method, %url, %status, error = %err, "Could not read quiz API response");
        fallback.to_owned()
    })?;

    if !status.is_success() {
        let message = failure_message(Some(&body), fallback);
        tracing::warn!(%method, %url, %status, %message, "Quiz API returned an error");
        return Err(message);
    }

    Ok(body.to_vec())
}

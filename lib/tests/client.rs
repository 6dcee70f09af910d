use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use wiki_quiz::{ClientError, Difficulty, GENERATION_FALLBACK, HISTORY_FALLBACK};

use crate::common::{spawn_app, spawn_app_with_timeout, unreachable_client};

mod common;

fn quiz_json(url: &str) -> Value {
    json!({
        "id": 1,
        "url": url,
        "title": "Rust (programming language)",
        "data": {
            "summary": "A systems programming language.",
            "key_entities": [
                {"name": "Graydon Hoare", "type": "person", "description": "Creator"}
            ],
            "quiz_questions": [
                {
                    "question": "Who created Rust?",
                    "options": [
                        {"text": "Graydon Hoare", "is_correct": true},
                        {"text": "Guido van Rossum", "is_correct": false}
                    ],
                    "difficulty": "easy",
                    "explanation": "Rust began as a personal project of Graydon Hoare."
                }
            ],
            "related_topics": ["Cargo (software)"]
        },
        "created_at": "2024-05-01T10:15:30.123456"
    })
}

#[tokio::test]
async fn generate_returns_record_for_submitted_url() {
    let router = Router::new().route(
        "/generate",
        post(|Json(body): Json<Value>| async move {
            let url = body["url"].as_str().unwrap_or_default().to_owned();
            Json(quiz_json(&url))
        }),
    );
    let app = spawn_app(router).await;

    let record = app
        .client
        .generate("https://en.wikipedia.org/wiki/Rust_(programming_language)")
        .await
        .unwrap();

    assert_eq!(
        record.url.as_deref(),
        Some("https://en.wikipedia.org/wiki/Rust_(programming_language)")
    );
    assert_eq!(record.title, "Rust (programming language)");
    assert_eq!(record.questions()[0].difficulty, Difficulty::Easy);
    assert_eq!(record.data.related_topics, vec!["Cargo (software)"]);
}

#[tokio::test]
async fn generate_failure_without_detail_uses_fallback() {
    let router = Router::new().route(
        "/generate",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"}))) }),
    );
    let app = spawn_app(router).await;

    let err = app.client.generate("https://example.com").await.unwrap_err();

    assert_eq!(err, ClientError::Generation(GENERATION_FALLBACK.to_owned()));
    assert_eq!(err.to_string(), "Failed to generate quiz");
}

#[tokio::test]
async fn generate_failure_surfaces_detail() {
    let router = Router::new().route(
        "/generate",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "Invalid Wikipedia URL"})),
            )
        }),
    );
    let app = spawn_app(router).await;

    let err = app.client.generate("https://example.com").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid Wikipedia URL");
}

#[tokio::test]
async fn generate_validation_error_uses_fallback() {
    let router = Router::new().route(
        "/generate",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": [{"loc": ["body", "url"], "msg": "invalid or missing URL scheme"}]})),
            )
        }),
    );
    let app = spawn_app(router).await;

    let err = app.client.generate("not a url").await.unwrap_err();

    assert_eq!(err.message(), GENERATION_FALLBACK);
}

#[tokio::test]
async fn generate_with_undecodable_body_uses_fallback() {
    let router = Router::new().route("/generate", post(|| async { "not json" }));
    let app = spawn_app(router).await;

    let err = app.client.generate("https://example.com").await.unwrap_err();

    assert_eq!(err.message(), GENERATION_FALLBACK);
}

#[tokio::test]
async fn generate_network_failure_uses_fallback() {
    let client = unreachable_client().await;

    let err = client.generate("https://example.com").await.unwrap_err();

    assert_eq!(err, ClientError::Generation(GENERATION_FALLBACK.to_owned()));
}

#[tokio::test]
async fn generate_timeout_uses_fallback() {
    let router = Router::new().route(
        "/generate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(quiz_json("https://example.com"))
        }),
    );
    let app = spawn_app_with_timeout(router, Duration::from_millis(200)).await;

    let err = app.client.generate("https://example.com").await.unwrap_err();

    assert_eq!(err.message(), GENERATION_FALLBACK);
}

#[tokio::test]
async fn history_returns_records_in_service_order() {
    let router = Router::new().route(
        "/history",
        get(|| async {
            Json(json!([
                {"id": 2, "title": "Newer", "data": {}},
                {"id": 1, "title": "Older", "data": {"quiz_questions": []}}
            ]))
        }),
    );
    let app = spawn_app(router).await;

    let records = app.client.history().await.unwrap();
    let ids: Vec<_> = records.iter().map(|record| record.id).collect();

    assert_eq!(ids, vec![Some(2), Some(1)]);
}

#[tokio::test]
async fn history_failure_surfaces_detail() {
    let router = Router::new().route(
        "/history",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "Internal server error: database unavailable"})),
            )
        }),
    );
    let app = spawn_app(router).await;

    let err = app.client.history().await.unwrap_err();

    assert_eq!(
        err,
        ClientError::History("Internal server error: database unavailable".to_owned())
    );
}

#[tokio::test]
async fn history_network_failure_uses_fallback() {
    let client = unreachable_client().await;

    let err = client.history().await.unwrap_err();

    assert_eq!(err.to_string(), HISTORY_FALLBACK);
}

#[tokio::test]
async fn base_url_path_is_preserved() {
    let router = Router::new().route(
        "/api/history",
        get(|| async { Json(json!([{"title": "Nested", "data": {}}])) }),
    );
    let app = spawn_app(router).await;
    let client = wiki_quiz::QuizClient::new(wiki_quiz::Config::new(
        app.address.join("api").unwrap(),
    ))
    .unwrap();

    let records = client.history().await.unwrap();

    assert_eq!(records[0].title, "Nested");
}

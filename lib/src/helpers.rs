use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

/// Pulls the human-readable `detail` text out of a failed response body.
///
/// Only a non-empty string `detail` counts; structured details such as
/// validation error lists yield `None`.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let error_body: ErrorBody = serde_json::from_slice(body).ok()?;

    match error_body.detail? {
        Value::String(detail) if !detail.is_empty() => Some(detail),
        _ => None,
    }
}

pub fn failure_message(body: Option<&[u8]>, fallback: &str) -> String {
    body.and_then(extract_detail)
        .unwrap_or_else(|| fallback.to_owned())
}

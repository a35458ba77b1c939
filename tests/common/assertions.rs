//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error envelope with the given status and `message`
pub fn assert_api_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    let json: Value = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert_eq!(json["message"], message, "Full response: {json}");
}

/// Assert a failed Pinterest call relayed with `detail` in the `error` key
pub fn assert_upstream_error(response: &TestResponse, expected: StatusCode, detail: &str) {
    assert_api_error(response, expected, "Pinterest API request failed");
    let json: Value = response.json();
    assert_eq!(json["error"], detail, "Full response: {json}");
}

/// Assert a 400 validation failure and return the `(field, message)` pairs
pub fn assert_validation_errors(response: &TestResponse) -> Vec<(String, String)> {
    assert_api_error(response, StatusCode::BAD_REQUEST, "Validation failed");
    let json: Value = response.json();
    json["errors"]
        .as_array()
        .expect("Expected errors array")
        .iter()
        .map(|e| {
            (
                e["field"].as_str().unwrap().to_string(),
                e["message"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

/// Assert suggestions are sorted by descending matchScore
pub fn assert_sorted_by_score(suggestions: &[Value]) {
    let scores: Vec<u64> = suggestions
        .iter()
        .map(|s| s["matchScore"].as_u64().unwrap())
        .collect();
    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted, "Suggestions not sorted by score");
}

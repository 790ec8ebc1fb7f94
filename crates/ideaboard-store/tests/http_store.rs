//! Integration tests for `HttpArtifactStore` using wiremock HTTP mocks.

use std::time::Duration;

use ideaboard_store::{HttpArtifactStore, LoadError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ideaboard_core::DateKey;

fn key(s: &str) -> DateKey {
    s.parse().expect("valid key")
}

fn store(base_url: &str) -> HttpArtifactStore {
    HttpArtifactStore::with_base_url(base_url, 30).expect("store construction should not fail")
}

fn document_body() -> serde_json::Value {
    serde_json::json!({
        "summary": {
            "total_tweets_analyzed": 438,
            "product_requests_found": 10,
            "token_usage": {
                "input_tokens": 120_000,
                "output_tokens": 4_200,
                "total_tokens": 124_200
            }
        },
        "product_requests": [
            {
                "category": "Developer Tool",
                "description": "flaky test triage assistant",
                "pain_point": "reruns eat the afternoon",
                "target_audience": "Developers",
                "urgency_level": "High",
                "tweets": [
                    {
                        "id": "tweet-1949046525050417589",
                        "text": "someone please build this",
                        "user_handle": "@ci_sufferer",
                        "created_at": "2025-07-25T10:04:00Z",
                        "engagement_score": 57,
                        "url": "https://x.com/ci_sufferer/status/1949046525050417589"
                    }
                ]
            },
            {
                "category": "Productivity Tool",
                "description": "focus-time calendar",
                "pain_point": "meeting fragmentation",
                "target_audience": "Remote Workers",
                "urgency_level": "Medium",
                "tweets": []
            }
        ]
    })
}

#[tokio::test]
async fn load_returns_parsed_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/250725_analysis.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_body()))
        .mount(&server)
        .await;

    let doc = store(&server.uri())
        .load(key("250725"))
        .await
        .expect("should parse document");

    assert_eq!(doc.summary.total_tweets_analyzed, 438);
    assert_eq!(doc.product_requests.len(), 2);
    // Stored order is rank order and must survive loading.
    assert_eq!(doc.product_requests[0].category, "Developer Tool");
    assert_eq!(doc.product_requests[0].total_engagement(), 57);
    assert_eq!(doc.product_requests[1].total_engagement(), 0);
}

#[tokio::test]
async fn missing_artifact_is_not_found_not_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/250726_analysis.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = store(&server.uri()).load(key("250726")).await;
    assert!(
        matches!(result, Err(LoadError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn document_missing_summary_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/250725_analysis.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "product_requests": []
            })),
        )
        .mount(&server)
        .await;

    let result = store(&server.uri()).load(key("250725")).await;
    assert!(
        matches!(result, Err(LoadError::Malformed { .. })),
        "expected Malformed, got: {result:?}"
    );
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/250725_analysis.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = store(&server.uri()).load(key("250725")).await;
    assert!(
        matches!(result, Err(LoadError::Malformed { .. })),
        "expected Malformed, got: {result:?}"
    );
}

#[tokio::test]
async fn server_error_surfaces_as_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/250725_analysis.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = store(&server.uri()).load(key("250725")).await;
    assert!(
        matches!(result, Err(LoadError::Http(_))),
        "expected Http, got: {result:?}"
    );
}

#[tokio::test]
async fn slow_response_surfaces_as_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/250725_analysis.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(document_body())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let store = HttpArtifactStore::with_base_url(&server.uri(), 1)
        .expect("store construction should not fail");
    let result = store.load(key("250725")).await;
    assert!(
        matches!(result, Err(LoadError::Timeout { .. })),
        "expected Timeout, got: {result:?}"
    );
}

#[tokio::test]
async fn repeated_loads_are_idempotent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/250725_analysis.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document_body()))
        .mount(&server)
        .await;

    let store = store(&server.uri());
    let first = store.load(key("250725")).await.expect("first load");
    let second = store.load(key("250725")).await.expect("second load");
    assert_eq!(first, second);
}

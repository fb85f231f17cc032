//! Error normalization: message precedence, typed variants, no-content
//! handling, and transport failures.

mod support;

use serde_json::json;
use unibox::ClientError;
use unibox::types::{TaskFilter, TaskStatus};
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn json_detail_field_becomes_the_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "X" })))
        .mount(&server)
        .await;

    let err = support::client_for(&server)
        .health()
        .check()
        .await
        .expect_err("500 should surface as an error");
    assert_eq!(err.to_string(), "X");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn non_json_body_becomes_the_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Y"))
        .mount(&server)
        .await;

    let err = support::client_for(&server)
        .health()
        .check()
        .await
        .expect_err("500 should surface as an error");
    assert_eq!(err.to_string(), "Y");
}

#[tokio::test]
async fn empty_body_falls_back_to_the_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = support::client_for(&server)
        .health()
        .check()
        .await
        .expect_err("500 should surface as an error");
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn task_list_failure_carries_the_service_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/actions/tasks"))
        .and(query_param("status", "pending"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "db unavailable" })),
        )
        .mount(&server)
        .await;

    let filter = TaskFilter {
        status: Some(TaskStatus::Pending),
        ..TaskFilter::default()
    };
    let err = support::client_for(&server)
        .tasks()
        .list(filter)
        .await
        .expect_err("500 should surface as an error");
    assert_eq!(err.to_string(), "db unavailable");
}

#[tokio::test]
async fn missing_resources_map_to_not_found() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/connections/{id}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "connection not found" })),
        )
        .mount(&server)
        .await;

    let err = support::client_for(&server)
        .connections()
        .get(id)
        .await
        .expect_err("404 should surface as an error");
    assert!(matches!(err, ClientError::NotFound { .. }));
    assert_eq!(err.to_string(), "connection not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn rate_limits_carry_the_retry_after_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/messages"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "5")
                .set_body_json(json!({ "detail": "slow down" })),
        )
        .mount(&server)
        .await;

    let err = support::client_for(&server)
        .messages()
        .list(Default::default())
        .await
        .expect_err("429 should surface as an error");
    match err {
        ClientError::RateLimited {
            message,
            retry_after,
        } => {
            assert_eq!(message, "slow down");
            assert_eq!(retry_after.as_deref(), Some("5"));
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn no_content_yields_an_empty_success() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path(format!("/connections/{id}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = support::client_for(&server)
        .connections()
        .delete(id)
        .await
        .expect("204 is a success");
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn transport_failures_pass_the_underlying_text_through() {
    // Nothing is listening here; the connection is refused outright.
    let client = unibox::ApiClient::builder("http://127.0.0.1:1").build().expect("client");

    let err = client
        .health()
        .check()
        .await
        .expect_err("connection should be refused");
    match err {
        ClientError::Http(message) => {
            assert!(message.contains("request to"), "message was: {message}")
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

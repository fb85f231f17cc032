//! Typed endpoint groups: query assembly, body serialization and response
//! decoding against a mock composite service.

mod support;

use serde_json::json;
use unibox::types::{
    BriefRequest, ClassifyRequest, ConnectionFilter, SyncCreate, TaskCreate, TaskPriority,
    TaskStatus,
};
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn connection_list_sends_filters_and_decodes_the_page() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path("/connections"))
        .and(query_param("provider", "gmail"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": id,
                "provider": "gmail",
                "display_name": "Work Gmail",
                "status": "connected",
                "is_active": true
            }],
            "total": 1,
            "skip": 0,
            "limit": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ConnectionFilter {
        provider: Some("gmail".to_owned()),
        limit: Some(10),
        ..ConnectionFilter::default()
    };
    let page = support::client_for(&server)
        .connections()
        .list(filter)
        .await
        .expect("list should decode");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, id);
    assert_eq!(page.items[0].provider, "gmail");
    assert!(page.items[0].is_active);
}

#[tokio::test]
async fn task_create_posts_the_expected_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/actions/tasks"))
        .and(body_json(json!({
            "title": "Review Q4 budget proposal",
            "priority": "high"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "title": "Review Q4 budget proposal",
            "priority": "high",
            "status": "pending",
            "source": "email"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TaskCreate {
        title: "Review Q4 budget proposal".to_owned(),
        description: None,
        priority: Some(TaskPriority::High),
        due_date: None,
        source: None,
    };
    let task = support::client_for(&server)
        .tasks()
        .create(request)
        .await
        .expect("create should decode");
    assert_eq!(task.id, 7);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.priority, TaskPriority::High);
}

#[tokio::test]
async fn bulk_delete_repeats_the_id_parameter() {
    let server = MockServer::start().await;
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path("/messages"))
        .and(query_param("message_ids", first.to_string()))
        .and(query_param("message_ids", second.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deleted": 2 })))
        .expect(1)
        .mount(&server)
        .await;

    let value = support::client_for(&server)
        .messages()
        .bulk_delete(&[first, second])
        .await
        .expect("bulk delete should succeed");
    assert_eq!(value["deleted"], 2);
}

#[tokio::test]
async fn classify_returns_the_run_counters() {
    let server = MockServer::start().await;
    let message_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/classification"))
        .and(body_json(json!({ "message_ids": [message_id] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "classifications": [{
                "id": Uuid::new_v4(),
                "message_id": message_id,
                "label": "action-required",
                "priority": 8
            }],
            "total_processed": 1,
            "success_count": 1,
            "error_count": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = support::client_for(&server)
        .classification()
        .classify(ClassifyRequest {
            message_ids: vec![message_id],
        })
        .await
        .expect("classify should decode");
    assert_eq!(outcome.total_processed, 1);
    assert_eq!(outcome.success_count, 1);
    assert_eq!(outcome.error_count, 0);
    assert_eq!(
        outcome.classifications[0].label.as_deref(),
        Some("action-required")
    );
}

#[tokio::test]
async fn brief_creation_decodes_items() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/briefs"))
        .and(body_json(json!({ "user_id": user_id, "max_items": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": Uuid::new_v4(),
            "user_id": user_id,
            "brief_date": "2025-11-12",
            "items": [
                { "title": "Budget review", "priority": 9 },
                { "title": "Team standup", "priority": 4 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let brief = support::client_for(&server)
        .classification()
        .create_brief(BriefRequest {
            user_id,
            date: None,
            max_items: Some(5),
        })
        .await
        .expect("brief should decode");
    assert_eq!(brief.items.len(), 2);
    assert_eq!(brief.items[0].title.as_deref(), Some("Budget review"));
}

#[tokio::test]
async fn classification_lists_are_bare_arrays() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/classification/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": Uuid::new_v4(),
            "title": "Follow up with finance",
            "priority": 7,
            "status": "open"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = support::client_for(&server)
        .classification()
        .list_tasks(Default::default())
        .await
        .expect("list should decode");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Follow up with finance");
}

#[tokio::test]
async fn current_user_decodes() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": user_id })))
        .expect(1)
        .mount(&server)
        .await;

    let user = support::client_for(&server)
        .auth()
        .current_user()
        .await
        .expect("current user should decode");
    assert_eq!(user.user_id, user_id);
}

#[tokio::test]
async fn google_login_forwards_the_redirect_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login/google"))
        .and(query_param("redirect", "https://app.example.com/inbox"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "auth_url": "https://accounts.google.com/o/oauth2/auth?state=abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let redirect = support::client_for(&server)
        .auth()
        .login_with_google(Some("https://app.example.com/inbox"))
        .await
        .expect("login should decode");
    assert!(redirect.auth_url.starts_with("https://accounts.google.com/"));
}

#[tokio::test]
async fn dashboard_snapshot_decodes_service_map() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "degraded",
            "services": {
                "integrations": { "status": "ok", "latency_ms": 12 },
                "classification": { "status": "down", "detail": "timeout" }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = support::client_for(&server)
        .dashboard()
        .get()
        .await
        .expect("dashboard should decode");
    assert_eq!(snapshot.status.as_deref(), Some("degraded"));
    assert_eq!(snapshot.services["integrations"].status, "ok");
    assert_eq!(
        snapshot.services["classification"].detail.as_deref(),
        Some("timeout")
    );
}

#[tokio::test]
async fn background_sync_failure_stays_in_the_background() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/syncs"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "detail": "sync service down" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let handle = client.syncs().trigger_background(SyncCreate {
        connection_id: Uuid::new_v4(),
        sync_type: None,
    });
    // The failure is logged inside the task; joining must not panic.
    handle.await.expect("background task completes cleanly");
}

#[tokio::test]
async fn background_sync_fires_the_create_request() {
    let server = MockServer::start().await;
    let connection_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/syncs"))
        .and(body_json(json!({ "connection_id": connection_id })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": Uuid::new_v4(),
            "connection_id": connection_id,
            "status": "queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::client_for(&server);
    let handle = client.syncs().trigger_background(SyncCreate {
        connection_id,
        sync_type: None,
    });
    handle.await.expect("background task completes cleanly");
}

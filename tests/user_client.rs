mod common;

use common::mock_backend::{MockBackend, MockResponse};
use userdeck::api::{Status, UserClient};
use userdeck::config::ApiConfig;

fn config_for(mock: &MockBackend, app_id: Option<&str>) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/data/v1/", mock.base_url()),
        app_id: app_id.map(str::to_string),
        timeout_seconds: 5,
        ..ApiConfig::default()
    }
}

#[tokio::test]
async fn fetch_users_requests_limit_only() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&common::user_page_json(0, 7)))
        .await;
    let client = UserClient::new(&config_for(&mock, Some("abc123"))).unwrap();

    let response = client.fetch_users(7).await;

    assert_eq!(response.status, Status::Resolved);
    assert_eq!(response.data.unwrap(), common::user_page(0, 7));
    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].uri, "/data/v1/user?limit=7");
    assert_eq!(requests[0].header("app-id"), Some("abc123"));
}

#[tokio::test]
async fn fetch_page_sends_page_and_limit() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&common::user_page_json(3, 5)))
        .await;
    let client = UserClient::new(&config_for(&mock, None)).unwrap();

    let response = client.fetch_page(3, 5).await;

    assert!(response.is_resolved());
    assert_eq!(response.data.unwrap().page, 3);
    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].uri, "/data/v1/user?page=3&limit=5");
    assert_eq!(requests[0].header("app-id"), None);
}

#[tokio::test]
async fn error_status_is_rejected_envelope() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(403, "APP_ID_MISSING"))
        .await;
    let client = UserClient::new(&config_for(&mock, None)).unwrap();

    let response = client.fetch_page(0, 5).await;

    assert_eq!(response.status, Status::Rejected);
    assert!(response.data.is_none());
    let error = response.error.unwrap();
    assert_eq!(error.kind, "status_error");
    assert!(error.message.contains("403"));
    assert!(error.message.contains("APP_ID_MISSING"));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json("<html>not json</html>"))
        .await;
    let client = UserClient::new(&config_for(&mock, None)).unwrap();

    let response = client.fetch_users(7).await;

    assert_eq!(response.status, Status::Rejected);
    assert_eq!(response.error.unwrap().kind, "decode_error");
}

#[tokio::test]
async fn unreachable_host_is_request_error() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: 2,
        ..ApiConfig::default()
    };
    let client = UserClient::new(&config).unwrap();

    let response = client.fetch_users(7).await;

    assert_eq!(response.status, Status::Rejected);
    let text = response.error_text().unwrap();
    assert!(text.starts_with(r#"{"type":"request_error""#), "{text}");
}

#[test]
fn invalid_app_id_is_rejected_at_construction() {
    let config = ApiConfig {
        app_id: Some("bad\nvalue".to_string()),
        ..ApiConfig::default()
    };
    assert!(UserClient::new(&config).is_err());
}

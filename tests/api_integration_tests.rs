use litlens::api::{ApiClient, ApiError, BookshelfApi, BookshelfUpload};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Sample Data (GET /) — the fallback contract
// ============================================================================

#[tokio::test]
async fn test_sample_data_success_returns_payload_unmodified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"x": 1})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(Some(mock_server.uri()));
    let payload = client.get_sample_data().await;

    assert_eq!(payload, json!({"x": 1}));
}

#[tokio::test]
async fn test_sample_data_404_returns_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(Some(mock_server.uri()));
    let payload = client.get_sample_data().await;

    assert_eq!(
        payload,
        json!({ "message": "This is a mock response because the endpoint does not exist yet." })
    );
}

#[tokio::test]
async fn test_sample_data_500_returns_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(Some(mock_server.uri()));
    let payload = client.get_sample_data().await;

    assert_eq!(
        payload,
        json!({ "message": "This is a mock response because the endpoint does not exist yet." })
    );
}

#[tokio::test]
async fn test_sample_data_unreachable_returns_fallback() {
    // Port 9 (discard) — nothing is listening there.
    let client = ApiClient::new(Some("http://127.0.0.1:9".to_string()));
    let payload = client.get_sample_data().await;

    assert_eq!(
        payload,
        json!({ "message": "This is a mock response because the endpoint does not exist yet." })
    );
}

#[tokio::test]
async fn test_sample_data_malformed_body_returns_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(Some(mock_server.uri()));
    let payload = client.get_sample_data().await;

    assert_eq!(
        payload,
        json!({ "message": "This is a mock response because the endpoint does not exist yet." })
    );
}

// ============================================================================
// Bookshelf Processing (POST /v1/bookshelf/process)
// ============================================================================

#[tokio::test]
async fn test_submit_bookshelf_accepted() {
    let mock_server = MockServer::start().await;
    let job_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/v1/bookshelf/process"))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(json!({ "job_id": job_id, "status": "processing" })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(Some(mock_server.uri()));
    let upload = BookshelfUpload::jpeg("shelf.jpg", vec![0xFF, 0xD8, 0xFF]);
    let accepted = client.submit_bookshelf(upload).await.unwrap();

    assert_eq!(accepted.job_id, job_id);
    assert_eq!(accepted.status, "processing");
}

#[tokio::test]
async fn test_submit_bookshelf_rejected_format_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/bookshelf/process"))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({ "detail": "Invalid image format. Only JPEG and PNG are accepted." }),
        ))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(Some(mock_server.uri()));
    let upload = BookshelfUpload {
        file_name: "notes.txt".to_string(),
        content_type: "text/plain".to_string(),
        bytes: b"not an image".to_vec(),
    };
    let result = client.submit_bookshelf(upload).await;

    assert!(matches!(result, Err(ApiError::Api { status: 400, .. })));
}

// ============================================================================
// Job Results (GET /v1/bookshelf/results/{job_id})
// ============================================================================

#[tokio::test]
async fn test_job_results_returns_status() {
    let mock_server = MockServer::start().await;
    let job_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/v1/bookshelf/results/{job_id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "job_id": job_id, "status": "processing" })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(Some(mock_server.uri()));
    let status = client.job_results(job_id).await.unwrap();

    assert_eq!(status.job_id, job_id);
    assert_eq!(status.status, "processing");
}

#[tokio::test]
async fn test_job_results_unreachable_is_network_error() {
    let client = ApiClient::new(Some("http://127.0.0.1:9".to_string()));
    let result = client.job_results(Uuid::new_v4()).await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_job_results_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;
    let job_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/v1/bookshelf/results/{job_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(Some(mock_server.uri()));
    let result = client.job_results(job_id).await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

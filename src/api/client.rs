//! HTTP client for the LitLens bookshelf service.
//!
//! Three endpoints:
//! - `GET /` — the sample-data placeholder. Failures of every kind are
//!   collapsed into a fixed fallback payload; callers never see an error.
//! - `POST /v1/bookshelf/process` — multipart image upload, replies 202
//!   with a job id.
//! - `GET /v1/bookshelf/results/{job_id}` — poll processing status.

use std::fmt;

use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::header::CONTENT_TYPE;
use serde_json::{Value, json};
use uuid::Uuid;

use super::types::{BookshelfUpload, JobAccepted, JobStatus, SAMPLE_FALLBACK_MESSAGE};

/// Errors that can occur while talking to the service.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service returned a non-2xx response.
    Api { status: u16, message: String },
    /// The response body was not what we expected.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The fixed payload returned when the sample endpoint cannot deliver.
pub fn sample_fallback() -> Value {
    json!({ "message": SAMPLE_FALLBACK_MESSAGE })
}

/// Everything the app needs from the bookshelf service.
///
/// The core holds this as a trait object so tests can run without a
/// network. `get_sample_data` is infallible on purpose: the placeholder
/// contract is "always hand back a valid-shaped payload".
#[async_trait]
pub trait BookshelfApi: Send + Sync {
    /// Returns the name of the accessor (for logs).
    fn name(&self) -> &str;

    /// Fetch the sample payload from `GET /`.
    ///
    /// On success the response body is returned unmodified. On any
    /// failure — connect error, non-2xx, unparseable body — the error is
    /// logged and [`sample_fallback`] is returned instead.
    async fn get_sample_data(&self) -> Value;

    /// Submit a bookshelf image for processing.
    async fn submit_bookshelf(&self, upload: BookshelfUpload) -> Result<JobAccepted, ApiError>;

    /// Poll the processing status of a submitted image.
    async fn job_results(&self, job_id: Uuid) -> Result<JobStatus, ApiError>;
}

/// Concrete accessor over reqwest.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Base URL priority: argument → `LITLENS_API_BASE_URL` → default.
    pub fn new(base_url: Option<String>) -> Self {
        let env_url = std::env::var("LITLENS_API_BASE_URL").ok();
        let final_url = base_url
            .or(env_url)
            .unwrap_or_else(|| "http://localhost:8000".to_string());

        Self {
            base_url: final_url,
            client: reqwest::Client::new(),
        }
    }

    /// The fallible half of `get_sample_data`.
    async fn fetch_root(&self) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Sample endpoint status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl BookshelfApi for ApiClient {
    fn name(&self) -> &str {
        "litlens-api"
    }

    async fn get_sample_data(&self) -> Value {
        match self.fetch_root().await {
            Ok(payload) => payload,
            Err(e) => {
                error!("API error: {}", e);
                sample_fallback()
            }
        }
    }

    async fn submit_bookshelf(&self, upload: BookshelfUpload) -> Result<JobAccepted, ApiError> {
        info!(
            "Submitting bookshelf image: {} ({}, {} bytes)",
            upload.file_name,
            upload.content_type,
            upload.bytes.len()
        );

        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| ApiError::Parse(format!("invalid content type: {e}")))?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(format!("{}/v1/bookshelf/process", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Upload rejected: {} - {}", status, message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let accepted = response
            .json::<JobAccepted>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        info!("Upload accepted, job_id={}", accepted.job_id);
        Ok(accepted)
    }

    async fn job_results(&self, job_id: Uuid) -> Result<JobStatus, ApiError> {
        debug!("Polling results for job_id={}", job_id);

        let response = self
            .client
            .get(format!("{}/v1/bookshelf/results/{}", self.base_url, job_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<JobStatus>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_shape() {
        let fallback = sample_fallback();
        assert_eq!(
            fallback["message"],
            "This is a mock response because the endpoint does not exist yet."
        );
    }

    #[test]
    fn test_api_error_display() {
        let e = ApiError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(e.to_string(), "API error (HTTP 404): Not Found");
        assert_eq!(
            ApiError::Network("refused".to_string()).to_string(),
            "network error: refused"
        );
    }
}

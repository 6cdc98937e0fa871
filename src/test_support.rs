//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{ApiError, BookshelfApi, BookshelfUpload, JobAccepted, JobStatus, sample_fallback};

/// A no-network accessor for tests that don't need real API calls.
/// `get_sample_data` resolves immediately with the fallback payload.
pub struct NoopApi;

#[async_trait]
impl BookshelfApi for NoopApi {
    fn name(&self) -> &str {
        "noop"
    }

    async fn get_sample_data(&self) -> Value {
        sample_fallback()
    }

    async fn submit_bookshelf(&self, _upload: BookshelfUpload) -> Result<JobAccepted, ApiError> {
        Err(ApiError::Network("noop accessor".to_string()))
    }

    async fn job_results(&self, _job_id: Uuid) -> Result<JobStatus, ApiError> {
        Err(ApiError::Network("noop accessor".to_string()))
    }
}

/// Creates a test App with a NoopApi.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopApi))
}

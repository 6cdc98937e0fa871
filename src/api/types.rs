use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message body of the payload returned when the sample endpoint fails.
pub const SAMPLE_FALLBACK_MESSAGE: &str =
    "This is a mock response because the endpoint does not exist yet.";

/// An image file submitted for bookshelf processing.
///
/// The service accepts JPEG and PNG only; anything else comes back as a
/// 400 from the server.
#[derive(Debug, Clone)]
pub struct BookshelfUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl BookshelfUpload {
    pub fn jpeg(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "image/jpeg".to_string(),
            bytes,
        }
    }

    pub fn png(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "image/png".to_string(),
            bytes,
        }
    }
}

/// Reply to an accepted upload (HTTP 202 from the processing endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAccepted {
    pub job_id: Uuid,
    pub status: String,
}

/// Polled processing state for a previously submitted image.
/// `status` is "processing" until the worker finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    pub job_id: Uuid,
    pub status: String,
}

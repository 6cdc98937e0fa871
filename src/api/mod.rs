//! # API Accessor
//!
//! HTTP layer for the LitLens bookshelf service. The `BookshelfApi` trait
//! is the seam between the core and the network: the core holds an
//! `Arc<dyn BookshelfApi>`, and tests substitute a no-network mock.
//!
//! The sample-data accessor is deliberately infallible: any failure is
//! logged and collapsed into a fixed fallback payload. The typed bookshelf
//! endpoints return `Result` like a normal client would.

mod client;
mod types;

pub use client::{ApiClient, ApiError, BookshelfApi, sample_fallback};
pub use types::{BookshelfUpload, JobAccepted, JobStatus, SAMPLE_FALLBACK_MESSAGE};

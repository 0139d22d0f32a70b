//! Shared types for the Floor back-office server
//!
//! Common types used across crates: entity models, payload structs,
//! error types and response structures.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use axum::{Json, body};
pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use http;
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};

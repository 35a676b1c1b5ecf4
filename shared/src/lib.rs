//! Shared types for the skincare storefront
//!
//! Wire models, the response envelope and error codes used by the
//! storefront client and by any Rust-side backend (or test double) that
//! speaks the same REST contract.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::{ApiResponse, Page};

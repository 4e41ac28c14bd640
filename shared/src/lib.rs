//! Shared types for the ISP back-office
//!
//! Entity models, create/update payloads, the unified error system and
//! small utilities used by admin-server and its API consumers.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

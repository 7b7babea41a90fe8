// API-facing error types
pub mod auth;
pub mod client;

// Re-exports for convenience
pub use auth::AuthError;
pub use client::ClientApiError;


use poem_openapi::payload::Json;

use crate::types::dto::common::ErrorResponse;

fn error_body(error: &str, message: impl Into<String>, status_code: u16) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code,
    })
}

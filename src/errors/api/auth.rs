use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

use super::error_body;
use crate::errors::internal::{CredentialError, InternalError, TokenError};
use crate::types::dto::common::ErrorResponse;

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Missing or malformed input
    #[oai(status = 400)]
    Validation(Json<ErrorResponse>),

    /// Username or email already exists
    #[oai(status = 400)]
    Conflict(Json<ErrorResponse>),

    /// Invalid username or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<ErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation(error_body("validation_error", message, 400))
    }

    pub fn conflict() -> Self {
        AuthError::Conflict(error_body(
            "conflict",
            "Username or email already exists",
            400,
        ))
    }

    /// Same message for unknown user and wrong password
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(error_body(
            "invalid_credentials",
            "Invalid username or password",
            401,
        ))
    }

    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(error_body("invalid_token", "Invalid or malformed JWT", 401))
    }

    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(error_body("expired_token", "JWT has expired", 401))
    }

    fn internal_server_error() -> Self {
        AuthError::InternalError(error_body(
            "internal_error",
            "An internal error occurred",
            500,
        ))
    }

    /// Convert InternalError to AuthError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Credential(CredentialError::Validation(message)) => {
                tracing::debug!("Auth request rejected: {}", message);
                Self::validation(message.clone())
            }
            InternalError::Credential(CredentialError::InvalidCredentials) => {
                tracing::debug!("Invalid credentials attempt");
                Self::invalid_credentials()
            }
            InternalError::Credential(CredentialError::DuplicateTrainer) => {
                tracing::warn!("Duplicate trainer registration attempt");
                Self::conflict()
            }
            // A valid token whose trainer no longer exists is no longer a valid credential
            InternalError::Credential(CredentialError::TrainerNotFound(trainer_id)) => {
                tracing::debug!("Token subject {} has no trainer", trainer_id);
                Self::invalid_token()
            }
            InternalError::Token(TokenError::Expired) => {
                tracing::debug!("Expired token");
                Self::expired_token()
            }
            InternalError::Token(TokenError::Invalid(reason)) => {
                tracing::debug!("Invalid token: {}", reason);
                Self::invalid_token()
            }
            InternalError::Database { operation, .. } => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            _ => {
                tracing::error!("Unexpected error in auth operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }

    fn body(&self) -> &ErrorResponse {
        match self {
            AuthError::Validation(json)
            | AuthError::Conflict(json)
            | AuthError::InvalidCredentials(json)
            | AuthError::InvalidToken(json)
            | AuthError::ExpiredToken(json)
            | AuthError::InternalError(json) => &json.0,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

use super::error_body;
use crate::errors::internal::{ClientError, CredentialError, InternalError, TokenError};
use crate::types::dto::common::ErrorResponse;

/// Client endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ClientApiError {
    /// Missing required field or unparseable value
    #[oai(status = 400)]
    Validation(Json<ErrorResponse>),

    /// Client email already used by this trainer
    #[oai(status = 400)]
    Conflict(Json<ErrorResponse>),

    /// Invalid or malformed JWT
    #[oai(status = 401)]
    InvalidToken(Json<ErrorResponse>),

    /// JWT has expired
    #[oai(status = 401)]
    ExpiredToken(Json<ErrorResponse>),

    /// Client does not exist for this trainer
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ClientApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientApiError::Validation(error_body("validation_error", message, 400))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ClientApiError::Conflict(error_body("conflict", message, 400))
    }

    pub fn invalid_token() -> Self {
        ClientApiError::InvalidToken(error_body("invalid_token", "Invalid or malformed JWT", 401))
    }

    pub fn expired_token() -> Self {
        ClientApiError::ExpiredToken(error_body("expired_token", "JWT has expired", 401))
    }

    /// Not-owned and nonexistent clients share this response
    pub fn not_found() -> Self {
        ClientApiError::NotFound(error_body("not_found", "Client not found", 404))
    }

    fn internal_server_error() -> Self {
        ClientApiError::InternalError(error_body(
            "internal_error",
            "An internal error occurred",
            500,
        ))
    }

    /// Convert InternalError to ClientApiError, logging what is not exposed
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Client(ClientError::Validation(message)) => {
                tracing::debug!("Client request rejected: {}", message);
                Self::validation(message.clone())
            }
            InternalError::Client(ClientError::DuplicateEmail(_)) => {
                Self::conflict("Client with this email already exists for this trainer")
            }
            InternalError::Client(ClientError::EmailTaken(_)) => {
                Self::conflict("Another client with this email already exists for this trainer")
            }
            InternalError::Client(ClientError::NotFound(client_id)) => {
                tracing::debug!("Client {} not found for caller", client_id);
                Self::not_found()
            }
            InternalError::Token(TokenError::Expired) => Self::expired_token(),
            InternalError::Token(TokenError::Invalid(reason)) => {
                tracing::debug!("Invalid token: {}", reason);
                Self::invalid_token()
            }
            InternalError::Credential(CredentialError::TrainerNotFound(_)) => Self::invalid_token(),
            _ => {
                tracing::error!("Unexpected error in client operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }

    fn body(&self) -> &ErrorResponse {
        match self {
            ClientApiError::Validation(json)
            | ClientApiError::Conflict(json)
            | ClientApiError::InvalidToken(json)
            | ClientApiError::ExpiredToken(json)
            | ClientApiError::NotFound(json)
            | ClientApiError::InternalError(json) => &json.0,
        }
    }
}

impl fmt::Display for ClientApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

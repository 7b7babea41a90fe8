use thiserror::Error;

pub mod client;
pub mod credential;
pub mod token;

pub use client::ClientError;
pub use credential::CredentialError;
pub use token::TokenError;

/// Internal error type for store and service operations
///
/// Infrastructure errors (shared) are kept apart from domain errors.
/// Not exposed via API - endpoints must convert to AuthError or ClientApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Database query or operation failed
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Cryptographic operation failed (hashing, signing)
    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl InternalError {
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

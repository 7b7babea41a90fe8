use thiserror::Error;

/// Bearer token validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, malformed token or unusable subject
    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token has expired")]
    Expired,
}

use thiserror::Error;

/// Client record errors, always scoped to the authenticated trainer
#[derive(Error, Debug)]
pub enum ClientError {
    /// Missing required field or unparseable value
    #[error("{0}")]
    Validation(String),

    /// Email already used by another client of the same trainer (create)
    #[error("Duplicate client email: {0}")]
    DuplicateEmail(String),

    /// New email collides with another client of the same trainer (update)
    #[error("Client email taken by another client: {0}")]
    EmailTaken(String),

    /// Missing, or owned by a different trainer
    #[error("Client not found: {0}")]
    NotFound(i32),
}

use thiserror::Error;

/// Trainer account errors (registration, login, identity lookup)
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Required input missing or empty
    #[error("{0}")]
    Validation(String),

    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username or email already exists")]
    DuplicateTrainer,

    #[error("Trainer not found: {0}")]
    TrainerNotFound(i32),
}

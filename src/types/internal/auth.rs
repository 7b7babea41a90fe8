use serde::{Deserialize, Serialize};

/// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (trainer id, decimal string)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Data needed to persist a new trainer account
#[derive(Debug, Clone)]
pub struct NewTrainer {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub specialization: Option<String>,
}

/// Registration input as submitted; required fields are checked by the service
#[derive(Debug, Clone, Default)]
pub struct TrainerRegistration {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub specialization: Option<String>,
}

use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::trainer;
use crate::types::internal::auth::TrainerRegistration;

/// Request model for trainer registration
///
/// Fields are optional at the parsing level so that missing values surface
/// as a structured validation error instead of a generic parse failure.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub specialization: Option<String>,
}

impl From<RegisterRequest> for TrainerRegistration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            bio: req.bio,
            profile_picture_url: req.profile_picture_url,
            specialization: req.specialization,
        }
    }
}

/// Request model for trainer login
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for authentication
    pub username: Option<String>,

    /// Password for authentication
    pub password: Option<String>,
}

/// Response model containing the access token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Number of seconds until the access token expires
    pub expires_in: i64,
}

/// Public trainer representation. Never carries the password hash.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct TrainerResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub specialization: Option<String>,
    /// ISO 8601
    pub created_at: String,
    /// ISO 8601
    pub updated_at: String,
}

impl From<trainer::Model> for TrainerResponse {
    fn from(model: trainer::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            profile_picture_url: model.profile_picture_url,
            specialization: model.specialization,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

/// API response for register endpoint
#[derive(ApiResponse, Debug)]
pub enum RegisterApiResponse {
    /// Trainer account created
    #[oai(status = 201)]
    Created(Json<TrainerResponse>),
}

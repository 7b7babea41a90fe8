use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::client;
use crate::types::internal::client::ClientFields;

/// Request model for creating a client
///
/// `first_name`, `last_name` and `email` are required; they are checked by the
/// service so the caller gets a message naming the missing field.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub profile_picture_url: Option<String>,
    pub health_notes: Option<String>,
}

/// Request model for a partial client update. Absent fields keep their value.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub profile_picture_url: Option<String>,
    pub health_notes: Option<String>,
}

impl From<CreateClientRequest> for ClientFields {
    fn from(req: CreateClientRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone_number: req.phone_number,
            date_of_birth: req.date_of_birth,
            address: req.address,
            profile_picture_url: req.profile_picture_url,
            health_notes: req.health_notes,
        }
    }
}

impl From<UpdateClientRequest> for ClientFields {
    fn from(req: UpdateClientRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone_number: req.phone_number,
            date_of_birth: req.date_of_birth,
            address: req.address,
            profile_picture_url: req.profile_picture_url,
            health_notes: req.health_notes,
        }
    }
}

/// Client record as returned by the API
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    pub id: i32,
    pub trainer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    /// `YYYY-MM-DD`
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub profile_picture_url: Option<String>,
    pub health_notes: Option<String>,
    /// ISO 8601
    pub created_at: String,
    /// ISO 8601
    pub updated_at: String,
}

impl From<client::Model> for ClientResponse {
    fn from(model: client::Model) -> Self {
        Self {
            id: model.id,
            trainer_id: model.trainer_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone_number: model.phone_number,
            date_of_birth: model
                .date_of_birth
                .map(|d| d.format("%Y-%m-%d").to_string()),
            address: model.address,
            profile_picture_url: model.profile_picture_url,
            health_notes: model.health_notes,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

/// API response for client creation
#[derive(ApiResponse, Debug)]
pub enum CreateClientApiResponse {
    /// Client created
    #[oai(status = 201)]
    Created(Json<ClientResponse>),
}

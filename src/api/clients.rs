use std::sync::Arc;

use poem::Request;
use poem_openapi::param::Path;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::BearerAuth;
use crate::app_data::AppData;
use crate::errors::api::ClientApiError;
use crate::services::{AuthService, ClientService};
use crate::types::dto::client::{
    ClientResponse, CreateClientApiResponse, CreateClientRequest, UpdateClientRequest,
};
use crate::types::dto::common::MessageResponse;
use crate::types::internal::RequestContext;

/// Client record endpoints, scoped to the trainer in the bearer token
pub struct ClientApi {
    auth_service: Arc<AuthService>,
    client_service: Arc<ClientService>,
}

impl ClientApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(Arc::clone(&app_data))),
            client_service: Arc::new(ClientService::new(app_data)),
        }
    }

    fn authenticate(
        &self,
        req: &Request,
        auth: &BearerAuth,
    ) -> Result<RequestContext, ClientApiError> {
        self.auth_service
            .authenticate(RequestContext::from_request(req), &auth.0.token)
            .map_err(ClientApiError::from_internal_error)
    }
}

/// API tags for client endpoints
#[derive(Tags)]
enum ClientTags {
    /// Client management
    Clients,
}

#[OpenApi]
impl ClientApi {
    /// Create a client for the authenticated trainer
    #[oai(path = "/clients", method = "post", tag = "ClientTags::Clients")]
    async fn create_client(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<CreateClientRequest>,
    ) -> Result<CreateClientApiResponse, ClientApiError> {
        let ctx = self.authenticate(req, &auth)?;

        let client = self
            .client_service
            .create(&ctx, body.0.into())
            .await
            .map_err(ClientApiError::from_internal_error)?;

        Ok(CreateClientApiResponse::Created(Json(client.into())))
    }

    /// List the authenticated trainer's clients
    #[oai(path = "/clients", method = "get", tag = "ClientTags::Clients")]
    async fn list_clients(
        &self,
        req: &Request,
        auth: BearerAuth,
    ) -> Result<Json<Vec<ClientResponse>>, ClientApiError> {
        let ctx = self.authenticate(req, &auth)?;

        let clients = self
            .client_service
            .list(&ctx)
            .await
            .map_err(ClientApiError::from_internal_error)?;

        Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
    }

    /// Fetch one client
    #[oai(path = "/clients/:id", method = "get", tag = "ClientTags::Clients")]
    async fn get_client(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<ClientResponse>, ClientApiError> {
        let ctx = self.authenticate(req, &auth)?;

        let client = self
            .client_service
            .get(&ctx, id.0)
            .await
            .map_err(ClientApiError::from_internal_error)?;

        Ok(Json(client.into()))
    }

    /// Partially update a client; omitted fields are left unchanged
    #[oai(path = "/clients/:id", method = "put", tag = "ClientTags::Clients")]
    async fn update_client(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<i32>,
        body: Json<UpdateClientRequest>,
    ) -> Result<Json<ClientResponse>, ClientApiError> {
        let ctx = self.authenticate(req, &auth)?;

        let client = self
            .client_service
            .update(&ctx, id.0, body.0.into())
            .await
            .map_err(ClientApiError::from_internal_error)?;

        Ok(Json(client.into()))
    }

    /// Delete a client
    #[oai(path = "/clients/:id", method = "delete", tag = "ClientTags::Clients")]
    async fn delete_client(
        &self,
        req: &Request,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<MessageResponse>, ClientApiError> {
        let ctx = self.authenticate(req, &auth)?;

        self.client_service
            .delete(&ctx, id.0)
            .await
            .map_err(ClientApiError::from_internal_error)?;

        Ok(Json(MessageResponse {
            message: "Client deleted successfully".to_string(),
        }))
    }
}

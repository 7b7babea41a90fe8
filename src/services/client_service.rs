use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::Set;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::ClientError;
use crate::services::auth_service::{authenticated_trainer, present};
use crate::stores::ClientStore;
use crate::types::db::client;
use crate::types::internal::RequestContext;
use crate::types::internal::client::{ClientFields, NewClient};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Client record management, always scoped to the authenticated trainer
pub struct ClientService {
    client_store: Arc<ClientStore>,
}

impl ClientService {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            client_store: Arc::clone(&app_data.client_store),
        }
    }

    /// Create a client owned by the authenticated trainer
    pub async fn create(
        &self,
        ctx: &RequestContext,
        fields: ClientFields,
    ) -> Result<client::Model, InternalError> {
        let trainer_id = authenticated_trainer(ctx)?;

        let first_name = require("first_name", fields.first_name)?;
        let last_name = require("last_name", fields.last_name)?;
        let email = require("email", fields.email)?;
        let date_of_birth = parse_date_of_birth(fields.date_of_birth)?;

        if self.client_store.email_taken(trainer_id, &email, None).await? {
            return Err(ClientError::DuplicateEmail(email).into());
        }

        let created = self
            .client_store
            .insert(
                trainer_id,
                NewClient {
                    first_name,
                    last_name,
                    email,
                    phone_number: fields.phone_number,
                    date_of_birth,
                    address: fields.address,
                    profile_picture_url: fields.profile_picture_url,
                    health_notes: fields.health_notes,
                },
            )
            .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            trainer_id,
            client_id = created.id,
            "Client created"
        );

        Ok(created)
    }

    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<client::Model>, InternalError> {
        let trainer_id = authenticated_trainer(ctx)?;

        self.client_store.list_for_trainer(trainer_id).await
    }

    pub async fn get(
        &self,
        ctx: &RequestContext,
        client_id: i32,
    ) -> Result<client::Model, InternalError> {
        let trainer_id = authenticated_trainer(ctx)?;

        self.client_store
            .find_owned(trainer_id, client_id)
            .await?
            .ok_or_else(|| ClientError::NotFound(client_id).into())
    }

    /// Apply a partial update; fields left as `None` keep their stored value
    pub async fn update(
        &self,
        ctx: &RequestContext,
        client_id: i32,
        fields: ClientFields,
    ) -> Result<client::Model, InternalError> {
        let existing = self.get(ctx, client_id).await?;
        let trainer_id = existing.trainer_id;

        let mut changes: client::ActiveModel = existing.clone().into();

        if let Some(first_name) = fields.first_name {
            changes.first_name = Set(require("first_name", Some(first_name))?);
        }
        if let Some(last_name) = fields.last_name {
            changes.last_name = Set(require("last_name", Some(last_name))?);
        }
        if let Some(email) = fields.email {
            let email = require("email", Some(email))?;
            if email != existing.email
                && self
                    .client_store
                    .email_taken(trainer_id, &email, Some(client_id))
                    .await?
            {
                return Err(ClientError::EmailTaken(email).into());
            }
            changes.email = Set(email);
        }
        if let Some(phone_number) = fields.phone_number {
            changes.phone_number = Set(Some(phone_number));
        }
        if let Some(date_of_birth) = parse_date_of_birth(fields.date_of_birth)? {
            changes.date_of_birth = Set(Some(date_of_birth));
        }
        if let Some(address) = fields.address {
            changes.address = Set(Some(address));
        }
        if let Some(profile_picture_url) = fields.profile_picture_url {
            changes.profile_picture_url = Set(Some(profile_picture_url));
        }
        if let Some(health_notes) = fields.health_notes {
            changes.health_notes = Set(Some(health_notes));
        }

        let updated = self.client_store.update(changes).await?;

        tracing::info!(
            request_id = %ctx.request_id,
            trainer_id,
            client_id,
            "Client updated"
        );

        Ok(updated)
    }

    pub async fn delete(&self, ctx: &RequestContext, client_id: i32) -> Result<(), InternalError> {
        let existing = self.get(ctx, client_id).await?;
        let trainer_id = existing.trainer_id;

        self.client_store.delete(existing).await?;

        tracing::info!(
            request_id = %ctx.request_id,
            trainer_id,
            client_id,
            "Client deleted"
        );

        Ok(())
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, InternalError> {
    present(value)
        .ok_or_else(|| ClientError::Validation(format!("Missing required field: {}", field)).into())
}

/// Blank means "no date"; anything else must be `YYYY-MM-DD`
fn parse_date_of_birth(value: Option<String>) -> Result<Option<NaiveDate>, InternalError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };

    let invalid =
        || ClientError::Validation("Invalid date_of_birth, expected YYYY-MM-DD".to_string());
    // chrono skips leading whitespace before numeric fields
    if raw.trim() != raw {
        return Err(invalid().into());
    }

    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| invalid().into())
}

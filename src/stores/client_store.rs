use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::errors::internal::ClientError;
use crate::stores::trainer_store::is_unique_violation;
use crate::types::db::client::{self, ActiveModel, Entity as Client};
use crate::types::internal::client::NewClient;

/// ClientStore persists client records
///
/// Every lookup is filtered by `trainer_id`; a client owned by another trainer
/// is indistinguishable from one that does not exist.
pub struct ClientStore {
    db: DatabaseConnection,
}

impl ClientStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All clients of a trainer, ordered by id
    pub async fn list_for_trainer(&self, trainer_id: i32) -> Result<Vec<client::Model>, InternalError> {
        Client::find()
            .filter(client::Column::TrainerId.eq(trainer_id))
            .order_by_asc(client::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_clients", e))
    }

    pub async fn find_owned(
        &self,
        trainer_id: i32,
        client_id: i32,
    ) -> Result<Option<client::Model>, InternalError> {
        Client::find_by_id(client_id)
            .filter(client::Column::TrainerId.eq(trainer_id))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_client", e))
    }

    /// Whether another client of this trainer already uses `email`
    ///
    /// `excluding` skips the client being updated.
    pub async fn email_taken(
        &self,
        trainer_id: i32,
        email: &str,
        excluding: Option<i32>,
    ) -> Result<bool, InternalError> {
        let mut query = Client::find()
            .filter(client::Column::TrainerId.eq(trainer_id))
            .filter(client::Column::Email.eq(email));
        if let Some(client_id) = excluding {
            query = query.filter(client::Column::Id.ne(client_id));
        }

        let count = query
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("check_client_email", e))?;

        Ok(count > 0)
    }

    pub async fn insert(
        &self,
        trainer_id: i32,
        new_client: NewClient,
    ) -> Result<client::Model, InternalError> {
        let now = Utc::now();
        let email = new_client.email.clone();

        let model = ActiveModel {
            trainer_id: Set(trainer_id),
            first_name: Set(new_client.first_name),
            last_name: Set(new_client.last_name),
            email: Set(new_client.email),
            phone_number: Set(new_client.phone_number),
            date_of_birth: Set(new_client.date_of_birth),
            address: Set(new_client.address),
            profile_picture_url: Set(new_client.profile_picture_url),
            health_notes: Set(new_client.health_notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ClientError::DuplicateEmail(email).into()
            } else {
                InternalError::database("insert_client", e)
            }
        })
    }

    /// Persist changed columns and refresh `updated_at`
    pub async fn update(&self, mut changes: ActiveModel) -> Result<client::Model, InternalError> {
        let email = match &changes.email {
            sea_orm::ActiveValue::Set(email) | sea_orm::ActiveValue::Unchanged(email) => email.clone(),
            sea_orm::ActiveValue::NotSet => String::new(),
        };
        changes.updated_at = Set(Utc::now());

        changes.update(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ClientError::EmailTaken(email).into()
            } else {
                InternalError::database("update_client", e)
            }
        })
    }

    pub async fn delete(&self, client: client::Model) -> Result<(), InternalError> {
        client
            .delete(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_client", e))?;

        Ok(())
    }
}

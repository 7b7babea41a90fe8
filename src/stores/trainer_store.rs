use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};

use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::types::db::trainer::{self, ActiveModel, Entity as Trainer};
use crate::types::internal::auth::NewTrainer;

/// TrainerStore persists trainer accounts
pub struct TrainerStore {
    db: DatabaseConnection,
}

impl TrainerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<trainer::Model>, InternalError> {
        Trainer::find()
            .filter(trainer::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_trainer_by_username", e))
    }

    pub async fn find_by_id(&self, trainer_id: i32) -> Result<Option<trainer::Model>, InternalError> {
        Trainer::find_by_id(trainer_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_trainer_by_id", e))
    }

    /// Whether any trainer already uses `username` or `email` (exact match)
    pub async fn username_or_email_taken(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, InternalError> {
        let count = Trainer::find()
            .filter(
                Condition::any()
                    .add(trainer::Column::Username.eq(username))
                    .add(trainer::Column::Email.eq(email)),
            )
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("check_trainer_uniqueness", e))?;

        Ok(count > 0)
    }

    /// Insert a new trainer
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored trainer with its assigned id
    /// * `Err(InternalError::Credential(DuplicateTrainer))` - A unique constraint rejected the row
    pub async fn insert(&self, new_trainer: NewTrainer) -> Result<trainer::Model, InternalError> {
        let now = Utc::now();

        let model = ActiveModel {
            username: Set(new_trainer.username),
            email: Set(new_trainer.email),
            password_hash: Set(new_trainer.password_hash),
            first_name: Set(new_trainer.first_name),
            last_name: Set(new_trainer.last_name),
            bio: Set(new_trainer.bio),
            profile_picture_url: Set(new_trainer.profile_picture_url),
            specialization: Set(new_trainer.specialization),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                CredentialError::DuplicateTrainer.into()
            } else {
                InternalError::database("insert_trainer", e)
            }
        })
    }
}

/// True when the database rejected a write because of a unique constraint
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

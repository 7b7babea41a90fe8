use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::errors::InternalError;

/// Connect to the database at `database_url`
///
/// Does NOT run migrations; call [`migrate_database`] separately.
pub async fn connect_database(database_url: &str) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database");

    Ok(db)
}

/// Run all pending migrations on the provided connection
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};

    #[tokio::test]
    async fn test_migrations_create_tables() {
        let db = connect_database("sqlite::memory:").await.unwrap();
        migrate_database(&db).await.unwrap();

        for table in ["trainers", "clients"] {
            let row = db
                .query_one(Statement::from_string(
                    db.get_database_backend(),
                    format!(
                        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                ))
                .await
                .unwrap();
            assert!(row.is_some(), "table {} should exist", table);
        }
    }

    #[tokio::test]
    async fn test_trainer_uniqueness_has_no_extra_index() {
        let db = connect_database("sqlite::memory:").await.unwrap();
        migrate_database(&db).await.unwrap();

        let row = db
            .query_one(Statement::from_string(
                db.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type='index' AND name='idx_trainers_username'"
                    .to_string(),
            ))
            .await
            .unwrap();

        assert!(row.is_none());
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = connect_database("sqlite::memory:").await.unwrap();

        migrate_database(&db).await.unwrap();
        migrate_database(&db).await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_url() {
        let result = connect_database("notadb://nowhere").await;

        assert!(matches!(result, Err(InternalError::Database { .. })));
    }
}

// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::config::{BootstrapSettings, MockEnvironment, SecretManager, connect_database, migrate_database};
use crate::stores::TrainerStore;
use crate::types::db::trainer;
use crate::types::internal::auth::NewTrainer;

/// Fresh in-memory SQLite database with all migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = connect_database("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    db
}

/// AppData over a fresh database with test secrets and default settings
pub async fn setup_test_app_data() -> Arc<AppData> {
    let env = MockEnvironment::with_test_secrets();
    let secret_manager = SecretManager::init(&env).expect("Failed to load test secrets");
    let settings = BootstrapSettings::from_env_provider(&env).expect("Failed to load settings");

    Arc::new(AppData::new(setup_test_db().await, &secret_manager, &settings))
}

/// Insert a trainer directly, bypassing password hashing
pub async fn insert_test_trainer(store: &TrainerStore, username: &str) -> trainer::Model {
    store
        .insert(NewTrainer {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "$argon2id$not-a-real-hash".to_string(),
            first_name: None,
            last_name: None,
            bio: None,
            profile_picture_url: None,
            specialization: None,
        })
        .await
        .expect("Failed to insert test trainer")
}

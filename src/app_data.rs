use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{BootstrapSettings, SecretManager};
use crate::services::{PasswordHasher, TokenService};
use crate::stores::{ClientStore, TrainerStore};

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once in `main` (or a test harness) and shared, as
/// `Arc<AppData>`, with the services and API handlers.
///
/// ```text
/// main.rs
///   ↓
/// AppData::new(db, &secret_manager, &settings)
///   ├─ trainer_store / client_store   (share the pooled connection)
///   ├─ password_hasher                (password_pepper)
///   └─ token_service                  (jwt_secret, expiration)
///   ↓ Arc<AppData>
///   ├─ AuthService::new(app_data)
///   └─ ClientService::new(app_data)
/// ```
pub struct AppData {
    pub trainer_store: Arc<TrainerStore>,
    pub client_store: Arc<ClientStore>,
    pub password_hasher: Arc<PasswordHasher>,
    pub token_service: Arc<TokenService>,
}

impl AppData {
    /// Build application data over an already-migrated connection
    pub fn new(
        db: DatabaseConnection,
        secret_manager: &SecretManager,
        settings: &BootstrapSettings,
    ) -> Self {
        tracing::debug!("Creating stores and services");

        let trainer_store = Arc::new(TrainerStore::new(db.clone()));
        let client_store = Arc::new(ClientStore::new(db));
        let password_hasher = Arc::new(PasswordHasher::new(secret_manager.password_pepper()));
        let token_service = Arc::new(TokenService::new(
            secret_manager.jwt_secret(),
            settings.jwt_expiration_minutes(),
        ));

        Self {
            trainer_store,
            client_store,
            password_hasher,
            token_service,
        }
    }
}

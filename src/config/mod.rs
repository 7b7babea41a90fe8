mod bootstrap_settings;
pub mod database;
mod env_provider;
mod errors;
mod logging;
mod secret_config;
mod secret_manager;

pub use bootstrap_settings::BootstrapSettings;
pub use database::{connect_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::{BootstrapError, SecretError};
pub use logging::{LoggingError, init_logging};
pub use secret_config::{SecretConfig, SecretType};
pub use secret_manager::SecretManager;

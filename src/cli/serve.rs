use std::sync::Arc;

use poem::{Server, listener::TcpListener};

use crate::AppData;
use crate::api;
use crate::config::{
    BootstrapSettings, EnvironmentProvider, SecretManager, connect_database, migrate_database,
};

/// Load secrets, migrate the database and serve the API until shutdown
pub async fn run_server(
    settings: &BootstrapSettings,
    env: &dyn EnvironmentProvider,
) -> Result<(), Box<dyn std::error::Error>> {
    let secret_manager = SecretManager::init(env)?;
    tracing::debug!("Secret manager initialized: {}", secret_manager);

    let db = connect_database(settings.database_url()).await?;
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::new(db, &secret_manager, settings));
    tracing::info!("{}", app_data.token_service);

    let address = settings.server_address();
    let server_url = format!("http://{}/api", address);
    let app = api::routes(app_data, &server_url);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}

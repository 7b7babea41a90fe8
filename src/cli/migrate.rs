use crate::config::{BootstrapSettings, connect_database, migrate_database};

/// Connect to the configured database and run all pending migrations
///
/// Does not load secrets or build AppData.
pub async fn run_migrations(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let db = connect_database(settings.database_url()).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}

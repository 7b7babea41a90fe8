// CLI module: serve the API or run maintenance commands

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::{BootstrapSettings, EnvironmentProvider};

/// Trainer clients backend CLI
#[derive(Parser, Debug)]
#[command(name = "trainer-backend")]
#[command(about = "Client records backend for personal trainers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run pending migrations, then serve the HTTP API (default)
    Serve,

    /// Run pending database migrations and exit
    Migrate,
}

/// Execute CLI command
///
/// Routes the parsed command to its handler. No subcommand means `serve`.
pub async fn execute_command(
    cli: Cli,
    env: &dyn EnvironmentProvider,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = BootstrapSettings::from_env_provider(env)?;
    tracing::debug!("Loaded settings for {}", settings.server_address());

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(&settings, env).await?,
        Commands::Migrate => migrate::run_migrations(&settings).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["trainer-backend"]).unwrap();

        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_subcommands_parse() {
        let serve = Cli::try_parse_from(["trainer-backend", "serve"]).unwrap();
        let migrate = Cli::try_parse_from(["trainer-backend", "migrate"]).unwrap();

        assert_eq!(serve.command, Some(Commands::Serve));
        assert_eq!(migrate.command, Some(Commands::Migrate));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["trainer-backend", "bootstrap"]).is_err());
    }
}

use clap::Parser;

use trainer_backend::cli::{Cli, execute_command};
use trainer_backend::config::{SystemEnvironment, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let env = SystemEnvironment;
    init_logging(&env)?;

    let cli = Cli::parse();

    if let Err(e) = execute_command(cli, &env).await {
        tracing::error!("{}", e);
        return Err(e);
    }

    Ok(())
}

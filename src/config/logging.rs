use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::EnvironmentProvider;

/// Configuration for application logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Load logging configuration from the given environment
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Self {
        let log_level = env.get_var("LOG_LEVEL").unwrap_or_else(|| "INFO".to_string());
        let app_log_file = env
            .get_var("APP_LOG_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            app_log_file,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console and optional daily-rolling file output
pub fn init_logging(env: &dyn EnvironmentProvider) -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env_provider(env);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    match &config.app_log_file {
        Some(log_file_path) => {
            let directory = log_file_path.parent().unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(directory)?;

            let file_name = log_file_path.file_name().ok_or_else(|| {
                LoggingError::InitializationError("Invalid log file path".to_string())
            })?;
            let file_appender = tracing_appender::rolling::daily(directory, file_name);

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_target(true)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter);

            subscriber
                .with(file_layer)
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
        None => {
            subscriber
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
    }

    Ok(())
}

use std::fmt;
use std::net::IpAddr;

use crate::config::{BootstrapError, EnvironmentProvider};

const DEFAULT_DATABASE_URL: &str = "sqlite://trainers.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 15;
/// One year
const MAX_JWT_EXPIRATION_MINUTES: i64 = 525_600;

/// Bootstrap settings for infrastructure configuration
///
/// Everything here is non-secret; secrets live in `SecretManager`.
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    jwt_expiration_minutes: i64,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment, falling back to defaults
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, BootstrapError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(BootstrapError::MissingRequiredSetting {
                setting_name: "DATABASE_URL".to_string(),
            });
        }

        let server_host = env
            .get_var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        if server_host != "localhost" && server_host.parse::<IpAddr>().is_err() {
            return Err(BootstrapError::invalid_format(
                "HOST",
                "IP address or localhost",
                server_host,
            ));
        }

        let server_port = match env.get_var("PORT") {
            Some(value) => match value.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(BootstrapError::invalid_format("PORT", "1-65535", value)),
            },
            None => DEFAULT_PORT,
        };

        let jwt_expiration_minutes = match env.get_var("JWT_EXPIRATION_MINUTES") {
            Some(value) => match value.parse::<i64>() {
                Ok(minutes) if (1..=MAX_JWT_EXPIRATION_MINUTES).contains(&minutes) => minutes,
                _ => {
                    return Err(BootstrapError::invalid_format(
                        "JWT_EXPIRATION_MINUTES",
                        format!("integer between 1 and {}", MAX_JWT_EXPIRATION_MINUTES),
                        value,
                    ));
                }
            },
            None => DEFAULT_JWT_EXPIRATION_MINUTES,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            jwt_expiration_minutes,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn jwt_expiration_minutes(&self) -> i64 {
        self.jwt_expiration_minutes
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}

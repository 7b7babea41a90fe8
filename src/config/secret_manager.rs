use std::fmt;

use crate::config::{EnvironmentProvider, SecretConfig, SecretError, SecretType};

/// Centralized manager for application secrets
pub struct SecretManager {
    jwt_secret: String,
    password_pepper: String,
}

impl SecretManager {
    /// Load and validate all secrets from the given environment
    ///
    /// # Errors
    /// Returns `SecretError` if any required secret is missing or fails validation
    pub fn init(env: &dyn EnvironmentProvider) -> Result<Self, SecretError> {
        let jwt_secret = Self::load_secret(env, &Self::jwt_config())?;
        let password_pepper = Self::load_secret(env, &Self::pepper_config())?;

        Ok(Self {
            jwt_secret,
            password_pepper,
        })
    }

    /// Signing key for access tokens
    fn jwt_config() -> SecretConfig {
        SecretConfig::env("JWT_SECRET").required(true).min_length(32)
    }

    /// Argon2 secret parameter mixed into every password hash
    fn pepper_config() -> SecretConfig {
        SecretConfig::env("PASSWORD_PEPPER")
            .required(true)
            .min_length(16)
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn password_pepper(&self) -> &str {
        &self.password_pepper
    }

    pub(crate) fn load_secret(
        env: &dyn EnvironmentProvider,
        config: &SecretConfig,
    ) -> Result<String, SecretError> {
        let value = match &config.secret_type {
            SecretType::EnvVar { name } => match env.get_var(name) {
                Some(v) => v,
                None if !config.required => return Ok(String::new()),
                None => {
                    return Err(SecretError::Missing {
                        secret_name: name.clone(),
                    });
                }
            },
        };

        if let Some(min_len) = config.min_length {
            if value.len() < min_len {
                return Err(SecretError::InvalidLength {
                    secret_name: config.secret_type.name().to_string(),
                    expected: min_len,
                    actual: value.len(),
                });
            }
        }

        Ok(value)
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretManager {{ secrets_loaded: 2 }}")
    }
}

use thiserror::Error;

/// Failures loading non-secret startup settings
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("Required bootstrap setting '{setting_name}' is missing")]
    MissingRequiredSetting { setting_name: String },

    #[error("Bootstrap setting '{setting_name}' has invalid format. Expected: {expected}, got: {actual}")]
    InvalidFormat {
        setting_name: String,
        expected: String,
        actual: String,
    },
}

impl BootstrapError {
    pub fn invalid_format(
        setting_name: &str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            setting_name: setting_name.to_string(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Failures loading secrets
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SecretError {
    #[error("Required secret '{secret_name}' is missing")]
    Missing { secret_name: String },

    #[error("Secret '{secret_name}' must be at least {expected} characters, got {actual}")]
    InvalidLength {
        secret_name: String,
        expected: usize,
        actual: usize,
    },
}

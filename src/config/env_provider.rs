use std::collections::HashMap;

/// Trait for providing environment variable access
///
/// Lets settings and secrets be loaded from an injected source, so tests never
/// touch the process-global environment.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Any key/value map can act as an environment
impl EnvironmentProvider for HashMap<String, String> {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Environment with valid secrets and nothing else
    pub fn with_test_secrets() -> Self {
        Self::empty()
            .with_var("JWT_SECRET", "test-secret-key-minimum-32-characters-long")
            .with_var("PASSWORD_PEPPER", "test-pepper-for-unit-tests")
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

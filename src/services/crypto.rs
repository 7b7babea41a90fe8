use std::fmt;

use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::errors::InternalError;

/// Well-formed Argon2id hash that no password matches
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Argon2id password hashing; the pepper is passed as Argon2's secret parameter
pub struct PasswordHasher {
    password_pepper: String,
}

impl PasswordHasher {
    pub fn new(password_pepper: impl Into<String>) -> Self {
        Self {
            password_pepper: password_pepper.into(),
        }
    }

    fn argon2(&self) -> Result<Argon2<'_>, argon2::Error> {
        Argon2::new_with_secret(
            self.password_pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
    }

    /// Hash a password into a PHC string using a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let argon2 = self.argon2().map_err(|e| {
            InternalError::crypto("argon2_init", format!("Failed to initialize Argon2 with secret: {}", e))
        })?;

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| InternalError::crypto("hash_password", e.to_string()))?
            .to_string();

        Ok(password_hash)
    }

    /// Check `password` against a stored PHC string
    ///
    /// A malformed hash is a mismatch, not an error.
    pub fn verify(&self, password: &str, password_hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
            return false;
        };
        let Ok(argon2) = self.argon2() else {
            return false;
        };

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl PasswordHasher {
    /// Run a full verification against a hash nothing matches
    pub fn verify_dummy(&self, password: &str) {
        let _ = self.verify(password, DUMMY_HASH);
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

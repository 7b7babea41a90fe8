use std::fmt;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::errors::InternalError;
use crate::errors::internal::TokenError;
use crate::types::internal::auth::Claims;

/// Issues and validates HS256 access tokens for trainers
pub struct TokenService {
    jwt_secret: String,
    jwt_expiration_minutes: i64,
}

impl TokenService {
    pub fn new(jwt_secret: impl Into<String>, jwt_expiration_minutes: i64) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            jwt_expiration_minutes,
        }
    }

    /// Lifetime of an issued token, as reported to clients in `expires_in`
    pub fn expires_in_seconds(&self) -> i64 {
        self.jwt_expiration_minutes.saturating_mul(60)
    }

    /// Generate a JWT whose subject is the given trainer id
    pub fn issue(&self, trainer_id: i32) -> Result<String, InternalError> {
        let now = Utc::now().timestamp();
        let exp = self
            .jwt_expiration_minutes
            .checked_mul(60)
            .and_then(|seconds| now.checked_add(seconds))
            .ok_or_else(|| {
                InternalError::crypto("generate_jwt", "token expiration out of range")
            })?;

        let claims = Claims {
            sub: trainer_id.to_string(),
            exp,
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::crypto("generate_jwt", e.to_string()))
    }

    /// Validate a JWT and return the trainer id it was issued for
    ///
    /// Expiry is exact: no leeway past `exp`.
    pub fn validate(&self, token: &str) -> Result<i32, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })?;

        token_data
            .claims
            .sub
            .parse::<i32>()
            .map_err(|_| TokenError::Invalid(format!("non-numeric subject: {}", token_data.claims.sub)))
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}

impl fmt::Display for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TokenService {{ jwt_expiration: {}min }}",
            self.jwt_expiration_minutes
        )
    }
}

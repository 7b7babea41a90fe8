use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::services::{PasswordHasher, TokenService};
use crate::stores::TrainerStore;
use crate::types::db::trainer;
use crate::types::internal::RequestContext;
use crate::types::internal::auth::{NewTrainer, TrainerRegistration};

/// Trainer registration, login and bearer token authentication
pub struct AuthService {
    trainer_store: Arc<TrainerStore>,
    password_hasher: Arc<PasswordHasher>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            trainer_store: Arc::clone(&app_data.trainer_store),
            password_hasher: Arc::clone(&app_data.password_hasher),
            token_service: Arc::clone(&app_data.token_service),
        }
    }

    /// Create a trainer account
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored trainer
    /// * `Err(CredentialError::Validation)` - username, email or password missing
    /// * `Err(CredentialError::DuplicateTrainer)` - username or email already in use
    pub async fn register(
        &self,
        ctx: &RequestContext,
        registration: TrainerRegistration,
    ) -> Result<trainer::Model, InternalError> {
        let (Some(username), Some(email), Some(password)) = (
            present(registration.username),
            present(registration.email),
            present(registration.password),
        ) else {
            return Err(CredentialError::Validation(
                "Missing username, email, or password".to_string(),
            )
            .into());
        };

        if self
            .trainer_store
            .username_or_email_taken(&username, &email)
            .await?
        {
            tracing::info!(request_id = %ctx.request_id, "Registration rejected: username or email taken");
            return Err(CredentialError::DuplicateTrainer.into());
        }

        let password_hash = self.password_hasher.hash(&password)?;

        let trainer = self
            .trainer_store
            .insert(NewTrainer {
                username,
                email,
                password_hash,
                first_name: registration.first_name,
                last_name: registration.last_name,
                bio: registration.bio,
                profile_picture_url: registration.profile_picture_url,
                specialization: registration.specialization,
            })
            .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            trainer_id = trainer.id,
            ip_address = ?ctx.ip_address,
            "Trainer registered"
        );

        Ok(trainer)
    }

    /// Verify credentials and issue an access token
    ///
    /// Unknown username and wrong password fail identically.
    ///
    /// # Returns
    /// * `Ok((access_token, expires_in_seconds))`
    pub async fn login(
        &self,
        ctx: &RequestContext,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<(String, i64), InternalError> {
        let (Some(username), Some(password)) = (present(username), present(password)) else {
            return Err(
                CredentialError::Validation("Missing username or password".to_string()).into(),
            );
        };

        let candidate = self.trainer_store.find_by_username(&username).await?;
        let verified = match &candidate {
            Some(trainer) => self.password_hasher.verify(&password, &trainer.password_hash),
            None => {
                self.password_hasher.verify_dummy(&password);
                false
            }
        };

        let trainer = match candidate {
            Some(trainer) if verified => trainer,
            _ => {
                tracing::info!(
                    request_id = %ctx.request_id,
                    ip_address = ?ctx.ip_address,
                    "Login failed"
                );
                return Err(CredentialError::InvalidCredentials.into());
            }
        };

        let access_token = self.token_service.issue(trainer.id)?;

        tracing::info!(
            request_id = %ctx.request_id,
            trainer_id = trainer.id,
            ip_address = ?ctx.ip_address,
            "Login succeeded"
        );

        Ok((access_token, self.token_service.expires_in_seconds()))
    }

    /// Validate a bearer token and return the context it authenticates
    pub fn authenticate(
        &self,
        ctx: RequestContext,
        token: &str,
    ) -> Result<RequestContext, InternalError> {
        let trainer_id = self.token_service.validate(token)?;
        Ok(ctx.with_trainer(trainer_id))
    }

    /// The trainer behind an authenticated context
    pub async fn whoami(&self, ctx: &RequestContext) -> Result<trainer::Model, InternalError> {
        let trainer_id = authenticated_trainer(ctx)?;

        self.trainer_store
            .find_by_id(trainer_id)
            .await?
            .ok_or_else(|| CredentialError::TrainerNotFound(trainer_id).into())
    }

    /// Tokens are stateless; logout only records that the client discarded its token
    pub fn logout(&self, ctx: &RequestContext) -> Result<(), InternalError> {
        let trainer_id = authenticated_trainer(ctx)?;

        tracing::info!(request_id = %ctx.request_id, trainer_id, "Trainer logged out");

        Ok(())
    }
}

/// The authenticated trainer id, or an invalid-token error for anonymous contexts
pub(crate) fn authenticated_trainer(ctx: &RequestContext) -> Result<i32, InternalError> {
    ctx.trainer_id.ok_or_else(|| {
        crate::errors::internal::TokenError::Invalid("request is not authenticated".to_string())
            .into()
    })
}

/// `None` for absent, empty or whitespace-only values
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::internal::TokenError;
    use crate::test::utils::setup_test_app_data;

    fn registration(username: &str, email: &str, password: &str) -> TrainerRegistration {
        TrainerRegistration {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            ..Default::default()
        }
    }

    async fn service() -> AuthService {
        AuthService::new(setup_test_app_data().await)
    }

    #[tokio::test]
    async fn test_register_stores_hashed_password() {
        let service = service().await;
        let ctx = RequestContext::new();

        let trainer = service
            .register(&ctx, registration("alice", "alice@example.com", "s3cret"))
            .await
            .unwrap();

        assert_eq!(trainer.username, "alice");
        assert_ne!(trainer.password_hash, "s3cret");
        assert!(trainer.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_keeps_profile_fields() {
        let service = service().await;
        let mut input = registration("alice", "alice@example.com", "s3cret");
        input.bio = Some("Coach".to_string());
        input.specialization = Some("Yoga".to_string());

        let trainer = service.register(&RequestContext::new(), input).await.unwrap();

        assert_eq!(trainer.bio.as_deref(), Some("Coach"));
        assert_eq!(trainer.specialization.as_deref(), Some("Yoga"));
        assert_eq!(trainer.first_name, None);
    }

    #[tokio::test]
    async fn test_register_requires_username_email_and_password() {
        let service = service().await;
        let ctx = RequestContext::new();

        for input in [
            TrainerRegistration::default(),
            registration("", "alice@example.com", "s3cret"),
            registration("alice", "   ", "s3cret"),
            TrainerRegistration {
                password: None,
                ..registration("alice", "alice@example.com", "x")
            },
        ] {
            let err = service.register(&ctx, input).await.unwrap_err();
            match err {
                InternalError::Credential(CredentialError::Validation(message)) => {
                    assert_eq!(message, "Missing username, email, or password");
                }
                other => panic!("Expected validation error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_register_same_username_twice_conflicts() {
        let service = service().await;
        let ctx = RequestContext::new();
        service
            .register(&ctx, registration("alice", "alice@example.com", "s3cret"))
            .await
            .unwrap();

        let err = service
            .register(&ctx, registration("alice", "other@example.com", "s3cret"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InternalError::Credential(CredentialError::DuplicateTrainer)
        ));
    }

    #[tokio::test]
    async fn test_register_same_email_twice_conflicts() {
        let service = service().await;
        let ctx = RequestContext::new();
        service
            .register(&ctx, registration("alice", "alice@example.com", "s3cret"))
            .await
            .unwrap();

        let err = service
            .register(&ctx, registration("alice2", "alice@example.com", "s3cret"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InternalError::Credential(CredentialError::DuplicateTrainer)
        ));
    }

    #[tokio::test]
    async fn test_login_issues_token_for_trainer() {
        let service = service().await;
        let ctx = RequestContext::new();
        let trainer = service
            .register(&ctx, registration("alice", "alice@example.com", "s3cret"))
            .await
            .unwrap();

        let (token, expires_in) = service
            .login(&ctx, Some("alice".to_string()), Some("s3cret".to_string()))
            .await
            .unwrap();

        assert_eq!(expires_in, 900);
        let authed = service.authenticate(RequestContext::new(), &token).unwrap();
        assert_eq!(authed.trainer_id, Some(trainer.id));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let service = service().await;
        let ctx = RequestContext::new();
        service
            .register(&ctx, registration("alice", "alice@example.com", "s3cret"))
            .await
            .unwrap();

        let wrong_password = service
            .login(&ctx, Some("alice".to_string()), Some("wrong".to_string()))
            .await
            .unwrap_err();
        let unknown_user = service
            .login(&ctx, Some("mallory".to_string()), Some("s3cret".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(
            wrong_password,
            InternalError::Credential(CredentialError::InvalidCredentials)
        ));
        assert!(matches!(
            unknown_user,
            InternalError::Credential(CredentialError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_login_requires_username_and_password() {
        let service = service().await;

        let err = service
            .login(&RequestContext::new(), Some("alice".to_string()), None)
            .await
            .unwrap_err();

        match err {
            InternalError::Credential(CredentialError::Validation(message)) => {
                assert_eq!(message, "Missing username or password");
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_authenticate_rejects_bad_token() {
        let service = service().await;

        let err = service
            .authenticate(RequestContext::new(), "garbage")
            .unwrap_err();

        assert!(matches!(err, InternalError::Token(TokenError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_whoami_returns_trainer() {
        let service = service().await;
        let trainer = service
            .register(
                &RequestContext::new(),
                registration("alice", "alice@example.com", "s3cret"),
            )
            .await
            .unwrap();

        let ctx = RequestContext::new().with_trainer(trainer.id);
        let me = service.whoami(&ctx).await.unwrap();

        assert_eq!(me.id, trainer.id);
        assert_eq!(me.username, "alice");
    }

    #[tokio::test]
    async fn test_whoami_for_missing_trainer_fails() {
        let service = service().await;

        let err = service
            .whoami(&RequestContext::new().with_trainer(999))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            InternalError::Credential(CredentialError::TrainerNotFound(999))
        ));
    }

    #[tokio::test]
    async fn test_logout_requires_authenticated_context() {
        let service = service().await;

        assert!(service.logout(&RequestContext::new().with_trainer(1)).is_ok());
        assert!(matches!(
            service.logout(&RequestContext::new()),
            Err(InternalError::Token(TokenError::Invalid(_)))
        ));
    }

    #[test]
    fn test_present_filters_blank_values() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some(String::new())), None);
        assert_eq!(present(Some("  ".to_string())), None);
        assert_eq!(present(Some("x".to_string())), Some("x".to_string()));
    }
}

use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::api::BearerAuth;
use crate::app_data::AppData;
use crate::errors::api::AuthError;
use crate::services::AuthService;
use crate::types::dto::auth::{
    LoginRequest, RegisterApiResponse, RegisterRequest, TokenResponse, TrainerResponse,
};
use crate::types::dto::common::MessageResponse;
use crate::types::internal::RequestContext;

/// Authentication API endpoints
pub struct AuthApi {
    auth_service: Arc<AuthService>,
}

impl AuthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(app_data)),
        }
    }

    /// Validate the bearer token and build an authenticated context
    fn authenticate(&self, req: &Request, auth: &BearerAuth) -> Result<RequestContext, AuthError> {
        self.auth_service
            .authenticate(RequestContext::from_request(req), &auth.0.token)
            .map_err(AuthError::from_internal_error)
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Register a new trainer account
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    async fn register(
        &self,
        req: &Request,
        body: Json<RegisterRequest>,
    ) -> Result<RegisterApiResponse, AuthError> {
        let ctx = RequestContext::from_request(req);

        let trainer = self
            .auth_service
            .register(&ctx, body.0.into())
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(RegisterApiResponse::Created(Json(trainer.into())))
    }

    /// Login with username and password to receive an access token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(
        &self,
        req: &Request,
        body: Json<LoginRequest>,
    ) -> Result<Json<TokenResponse>, AuthError> {
        let ctx = RequestContext::from_request(req);
        let LoginRequest { username, password } = body.0;

        let (access_token, expires_in) = self
            .auth_service
            .login(&ctx, username, password)
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(Json(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }))
    }

    /// Logout; the token stays valid until it expires and must be discarded by the caller
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(
        &self,
        req: &Request,
        auth: BearerAuth,
    ) -> Result<Json<MessageResponse>, AuthError> {
        let ctx = self.authenticate(req, &auth)?;

        self.auth_service
            .logout(&ctx)
            .map_err(AuthError::from_internal_error)?;

        Ok(Json(MessageResponse {
            message: "Logout successful. Please discard the token on the client side."
                .to_string(),
        }))
    }

    /// Return the trainer the bearer token belongs to
    #[oai(path = "/whoami", method = "get", tag = "AuthTags::Authentication")]
    async fn whoami(
        &self,
        req: &Request,
        auth: BearerAuth,
    ) -> Result<Json<TrainerResponse>, AuthError> {
        let ctx = self.authenticate(req, &auth)?;

        let trainer = self
            .auth_service
            .whoami(&ctx)
            .await
            .map_err(AuthError::from_internal_error)?;

        Ok(Json(trainer.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_app_data;

    fn register_body(username: &str, password: &str) -> Json<RegisterRequest> {
        Json(RegisterRequest {
            username: Some(username.to_string()),
            email: Some(format!("{}@example.com", username)),
            password: Some(password.to_string()),
            ..Default::default()
        })
    }

    fn login_body(username: &str, password: &str) -> Json<LoginRequest> {
        Json(LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        })
    }

    fn bearer(token: &str) -> BearerAuth {
        BearerAuth(poem_openapi::auth::Bearer {
            token: token.to_string(),
        })
    }

    #[tokio::test]
    async fn test_register_returns_public_trainer() {
        let api = AuthApi::new(setup_test_app_data().await);

        let result = api
            .register(&Request::default(), register_body("alice", "s3cret"))
            .await;

        match result {
            Ok(RegisterApiResponse::Created(Json(trainer))) => {
                assert_eq!(trainer.username, "alice");
                assert_eq!(trainer.email, "alice@example.com");
            }
            Err(e) => panic!("Expected Created, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_register_twice_is_conflict() {
        let api = AuthApi::new(setup_test_app_data().await);
        api.register(&Request::default(), register_body("alice", "s3cret"))
            .await
            .unwrap();

        let err = api
            .register(&Request::default(), register_body("alice", "s3cret"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Conflict(_)));
        assert_eq!(err.message(), "Username or email already exists");
    }

    #[tokio::test]
    async fn test_login_then_whoami_and_logout() {
        let api = AuthApi::new(setup_test_app_data().await);
        api.register(&Request::default(), register_body("alice", "s3cret"))
            .await
            .unwrap();

        let token = api
            .login(&Request::default(), login_body("alice", "s3cret"))
            .await
            .unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 900);

        let me = api
            .whoami(&Request::default(), bearer(&token.access_token))
            .await
            .unwrap();
        assert_eq!(me.username, "alice");

        let logout = api
            .logout(&Request::default(), bearer(&token.access_token))
            .await
            .unwrap();
        assert!(logout.message.starts_with("Logout successful"));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let api = AuthApi::new(setup_test_app_data().await);
        api.register(&Request::default(), register_body("alice", "s3cret"))
            .await
            .unwrap();

        let err = api
            .login(&Request::default(), login_body("alice", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials(_)));
        assert_eq!(err.message(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_logout_with_invalid_token() {
        let api = AuthApi::new(setup_test_app_data().await);

        let err = api
            .logout(&Request::default(), bearer("not-a-jwt"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}

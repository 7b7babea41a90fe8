// API layer - HTTP endpoints
pub mod auth;
pub mod clients;
pub mod health;

use std::sync::Arc;

use poem::Route;
use poem_openapi::auth::Bearer;
use poem_openapi::{OpenApiService, SecurityScheme};

pub use auth::AuthApi;
pub use clients::ClientApi;
pub use health::HealthApi;

use crate::app_data::AppData;

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(Bearer);

/// The OpenAPI service with every endpoint group
pub fn api_service(
    app_data: Arc<AppData>,
    server_url: &str,
) -> OpenApiService<(HealthApi, AuthApi, ClientApi), ()> {
    OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(Arc::clone(&app_data)),
            ClientApi::new(app_data),
        ),
        "Trainer Clients API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url)
}

/// Compose routes: API under `/api`, Swagger UI under `/swagger`
pub fn routes(app_data: Arc<AppData>, server_url: &str) -> Route {
    let api_service = api_service(app_data, server_url);
    let ui = api_service.swagger_ui();

    Route::new().nest("/api", api_service).nest("/swagger", ui)
}

// Common test utilities for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use poem::Route;
use poem::http::StatusCode;
use poem::test::{TestClient, TestResponse};
use serde_json::{Value, json};
use trainer_backend::AppData;
use trainer_backend::api::routes;
use trainer_backend::config::{BootstrapSettings, SecretManager, connect_database, migrate_database};

pub type Client = TestClient<Route>;

/// Environment with valid test secrets
pub fn test_env() -> HashMap<String, String> {
    [
        ("JWT_SECRET", "integration-secret-key-minimum-32-characters"),
        ("PASSWORD_PEPPER", "integration-pepper-value"),
        ("JWT_EXPIRATION_MINUTES", "15"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// The full HTTP surface over a fresh in-memory database
pub async fn setup_test_client() -> Client {
    let env = test_env();
    let settings = BootstrapSettings::from_env_provider(&env).expect("Failed to load settings");
    let secret_manager = SecretManager::init(&env).expect("Failed to load secrets");

    let db = connect_database("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    let app_data = Arc::new(AppData::new(db, &secret_manager, &settings));
    TestClient::new(routes(app_data, "http://localhost:3000/api"))
}

/// Status and parsed body; non-JSON bodies come back as a string value
pub async fn read(resp: TestResponse) -> (StatusCode, Value) {
    let status = resp.0.status();
    let body = resp
        .0
        .into_body()
        .into_string()
        .await
        .expect("Failed to read response body");

    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap_or(Value::String(body))
    };

    (status, value)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub async fn register(cli: &Client, username: &str, password: &str) -> (StatusCode, Value) {
    read(
        cli.post("/api/auth/register")
            .body_json(&json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": password,
            }))
            .send()
            .await,
    )
    .await
}

pub async fn login(cli: &Client, username: &str, password: &str) -> (StatusCode, Value) {
    read(
        cli.post("/api/auth/login")
            .body_json(&json!({ "username": username, "password": password }))
            .send()
            .await,
    )
    .await
}

/// Register and log in, returning (trainer id, access token)
pub async fn register_and_login(cli: &Client, username: &str) -> (i64, String) {
    let (status, trainer) = register(cli, username, "password123").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, token) = login(cli, username, "password123").await;
    assert_eq!(status, StatusCode::OK);

    (
        trainer["id"].as_i64().expect("trainer id"),
        token["access_token"]
            .as_str()
            .expect("access token")
            .to_string(),
    )
}

pub async fn create_client(cli: &Client, token: &str, body: Value) -> (StatusCode, Value) {
    read(
        cli.post("/api/clients")
            .header("Authorization", bearer(token))
            .body_json(&body)
            .send()
            .await,
    )
    .await
}

pub async fn get_client(cli: &Client, token: &str, id: i64) -> (StatusCode, Value) {
    read(
        cli.get(format!("/api/clients/{}", id))
            .header("Authorization", bearer(token))
            .send()
            .await,
    )
    .await
}

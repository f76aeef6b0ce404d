#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use corkboard_config::{
    AuthConfig, Config, ConfigMetadata, CorsConfig, DatabaseConfig,
    ServerConfig,
};
use corkboard_core::{
    api::routes::v1, application::AppUnitOfWork, database::InMemoryDatabase,
};
use corkboard_server::{AppState, create_app};
use serde_json::{Value, json};

pub struct TestApp {
    pub server: TestServer,
    pub database: InMemoryDatabase,
    pub state: AppState,
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseConfig { url: None },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        auth: AuthConfig {
            password_pepper: "test-pepper".into(),
            session_ttl_days: 30,
        },
        dev_mode: true,
        metadata: ConfigMetadata::default(),
    }
}

pub fn build_test_app() -> Result<TestApp> {
    let database = InMemoryDatabase::new();
    let unit_of_work = Arc::new(AppUnitOfWork::in_memory(database.clone()));
    let state = AppState::new(Arc::new(test_config()), unit_of_work, None)
        .map_err(|err| anyhow!("failed to build app state: {err}"))?;
    let server = TestServer::new(create_app(state.clone()))
        .map_err(|err| anyhow!(err.to_string()))?;

    Ok(TestApp {
        server,
        database,
        state,
    })
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Registers a user and returns `(access_token, user_id)`.
pub async fn register(server: &TestServer, username: &str) -> (String, String) {
    let response = server
        .post(v1::auth::REGISTER)
        .json(&json!({
            "username": username,
            "display_name": "Theme Tester",
            "password": "Password#123"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let token = body["data"]["access_token"]
        .as_str()
        .expect("access_token present")
        .to_string();
    let user_id = body["data"]["user_id"]
        .as_str()
        .expect("user_id present")
        .to_string();
    (token, user_id)
}

#![cfg(feature = "db-tests")]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum::http::StatusCode;
use axum_test::TestServer;
use corkboard_core::{
    api::routes::v1, application::AppUnitOfWork, database::PostgresDatabase,
};
use corkboard_server::{AppState, create_app};
use serde_json::json;
use sqlx::PgPool;

#[path = "support/mod.rs"]
mod support;
use support::{bearer, register, test_config};

fn postgres_server(pool: PgPool) -> Result<TestServer> {
    let postgres = Arc::new(PostgresDatabase::from_pool(pool));
    let unit_of_work = Arc::new(AppUnitOfWork::from_postgres(&postgres));
    let state = AppState::new(Arc::new(test_config()), unit_of_work, Some(postgres))
        .map_err(|err| anyhow!("failed to build app state: {err}"))?;
    TestServer::new(create_app(state)).map_err(|err| anyhow!(err.to_string()))
}

#[sqlx::test(migrator = "corkboard_core::MIGRATOR")]
async fn theme_round_trips_through_postgres(pool: PgPool) -> Result<()> {
    let server = postgres_server(pool.clone())?;
    let (token, user_id) = register(&server, "pg_theme").await;

    server
        .put(v1::users::CURRENT_THEME)
        .add_header("Authorization", bearer(&token))
        .json(&json!({
            "themeCardBackgroundColor": "#101820",
            "themeCardShadowColor": "rgba(16, 24, 32, 0.25)"
        }))
        .await
        .assert_status_ok();

    let (background, hover, shadow): (Option<String>, Option<String>, Option<String>) =
        sqlx::query_as(
            "SELECT theme_card_background_color, theme_card_hover_color, theme_card_shadow_color \
             FROM users WHERE id = $1::uuid",
        )
        .bind(&user_id)
        .fetch_one(&pool)
        .await?;
    assert_eq!(background.as_deref(), Some("#101820"));
    assert_eq!(hover, None);
    assert_eq!(shadow.as_deref(), Some("rgba(16, 24, 32, 0.25)"));

    let css = server
        .get(v1::users::CURRENT_THEME_CSS)
        .add_header("Authorization", bearer(&token))
        .await
        .text();
    assert!(css.contains("border-color: #060e16 !important;"));
    Ok(())
}

#[sqlx::test(migrator = "corkboard_core::MIGRATOR")]
async fn deleted_user_stylesheet_is_unauthorized(pool: PgPool) -> Result<()> {
    let server = postgres_server(pool.clone())?;
    let (token, user_id) = register(&server, "pg_gone").await;

    sqlx::query("DELETE FROM users WHERE id = $1::uuid")
        .bind(&user_id)
        .execute(&pool)
        .await?;

    let response = server
        .get(v1::users::CURRENT_THEME_CSS)
        .add_header("Authorization", bearer(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    Ok(())
}

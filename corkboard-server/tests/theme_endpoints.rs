use anyhow::{Result, anyhow};
use axum::{
    Extension,
    body::to_bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use corkboard_core::api::routes::v1;
use corkboard_server::users::theme_handlers::get_theme_css;
use serde_json::{Value, json};
use uuid::Uuid;

#[path = "support/mod.rs"]
mod support;
use support::{bearer, build_test_app, register};

const DEFAULT_BACKGROUND_RULE: &str = "background-color: #f8f9fa !important;";

#[tokio::test]
async fn stylesheet_requires_a_session() -> Result<()> {
    let app = build_test_app()?;

    let response = app.server.get(v1::users::CURRENT_THEME_CSS).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_text("Unauthorized");

    let bogus = app
        .server
        .get(v1::users::CURRENT_THEME_CSS)
        .add_header("Authorization", bearer("not-a-session"))
        .await;
    bogus.assert_status(StatusCode::UNAUTHORIZED);
    bogus.assert_text("Unauthorized");
    Ok(())
}

#[tokio::test]
async fn new_users_get_the_default_stylesheet() -> Result<()> {
    let app = build_test_app()?;
    let (token, _) = register(&app.server, "defaults").await;

    let response = app
        .server
        .get(v1::users::CURRENT_THEME_CSS)
        .add_header("Authorization", bearer(&token))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-type").to_str()?,
        "text/css; charset=utf-8"
    );
    assert_eq!(response.header("cache-control").to_str()?, "no-store");

    let css = response.text();
    assert!(css.contains(DEFAULT_BACKGROUND_RULE));
    assert!(css.contains("border-color: #eeeff0 !important;"));
    assert!(css.contains("box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08) !important;"));
    Ok(())
}

#[tokio::test]
async fn saved_colors_flow_into_the_stylesheet() -> Result<()> {
    let app = build_test_app()?;
    let (token, _) = register(&app.server, "saver").await;

    let saved = app
        .server
        .put(v1::users::CURRENT_THEME)
        .add_header("Authorization", bearer(&token))
        .json(&json!({
            "themeCardBackgroundColor": "#1E1E2E",
            "themeCardHoverColor": "#313244",
            "themeCardShadowColor": "rgba(0,0,0,0.4)"
        }))
        .await;
    saved.assert_status_ok();
    let body: Value = saved.json();
    assert_eq!(body["data"]["themeCardBackgroundColor"], "#1e1e2e");
    assert_eq!(body["data"]["themeCardShadowColor"], "rgba(0, 0, 0, 0.4)");

    let css = app
        .server
        .get(v1::users::CURRENT_THEME_CSS)
        .add_header("Authorization", bearer(&token))
        .await
        .text();
    assert!(css.contains("background-color: #1e1e2e !important;"));
    assert!(css.contains("border-color: #141424 !important;"));
    assert!(css.contains("background-color: #313244 !important;"));
    assert!(css.contains("box-shadow: 0 2px 6px rgba(0, 0, 0, 0.4) !important;"));
    Ok(())
}

#[tokio::test]
async fn compact_shadow_that_fits_the_column_is_saved() -> Result<()> {
    let app = build_test_app()?;
    let (token, _) = register(&app.server, "compact").await;

    let saved = app
        .server
        .put(v1::users::CURRENT_THEME)
        .add_header("Authorization", bearer(&token))
        .json(&json!({ "themeCardShadowColor": "rgba(10,20,30,0.5)" }))
        .await;
    saved.assert_status_ok();
    let body: Value = saved.json();
    assert_eq!(body["data"]["themeCardShadowColor"], "rgba(10,20,30,0.5)");

    let css = app
        .server
        .get(v1::users::CURRENT_THEME_CSS)
        .add_header("Authorization", bearer(&token))
        .await
        .text();
    assert!(css.contains("box-shadow: 0 1px 3px rgba(10, 20, 30, 0.5) !important;"));
    assert!(css.contains(DEFAULT_BACKGROUND_RULE));
    Ok(())
}

#[tokio::test]
async fn reset_restores_the_default_stylesheet() -> Result<()> {
    let app = build_test_app()?;
    let (token, _) = register(&app.server, "resetter").await;

    let defaults = app
        .server
        .get(v1::users::CURRENT_THEME_CSS)
        .add_header("Authorization", bearer(&token))
        .await
        .text();

    app.server
        .put(v1::users::CURRENT_THEME)
        .add_header("Authorization", bearer(&token))
        .json(&json!({ "themeCardBackgroundColor": "#000000" }))
        .await
        .assert_status_ok();

    let cleared = app
        .server
        .put(v1::users::CURRENT_THEME)
        .add_header("Authorization", bearer(&token))
        .json(&json!({
            "themeCardBackgroundColor": null,
            "themeCardHoverColor": null,
            "themeCardShadowColor": null
        }))
        .await;
    cleared.assert_status_ok();

    let stored: Value = app
        .server
        .get(v1::users::CURRENT_THEME)
        .add_header("Authorization", bearer(&token))
        .await
        .json();
    assert!(stored["data"]["themeCardBackgroundColor"].is_null());
    assert!(stored["data"]["themeCardHoverColor"].is_null());
    assert!(stored["data"]["themeCardShadowColor"].is_null());

    let after = app
        .server
        .get(v1::users::CURRENT_THEME_CSS)
        .add_header("Authorization", bearer(&token))
        .await
        .text();
    assert_eq!(after, defaults);
    Ok(())
}

#[tokio::test]
async fn invalid_colors_are_rejected_and_nothing_changes() -> Result<()> {
    let app = build_test_app()?;
    let (token, _) = register(&app.server, "validator").await;

    app.server
        .put(v1::users::CURRENT_THEME)
        .add_header("Authorization", bearer(&token))
        .json(&json!({ "themeCardHoverColor": "#abcdef" }))
        .await
        .assert_status_ok();

    for invalid in [
        json!({ "themeCardBackgroundColor": "red; } body { display: none" }),
        json!({ "themeCardBackgroundColor": "rgba(0, 0, 0, 0.1)" }),
        json!({ "themeCardShadowColor": "rgba(0, 0, 0, 2)" }),
    ] {
        let response = app
            .server
            .put(v1::users::CURRENT_THEME)
            .add_header("Authorization", bearer(&token))
            .json(&invalid)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"]["status"], 400);
    }

    let stored: Value = app
        .server
        .get(v1::users::CURRENT_THEME)
        .add_header("Authorization", bearer(&token))
        .await
        .json();
    assert_eq!(stored["data"]["themeCardHoverColor"], "#abcdef");
    assert!(stored["data"]["themeCardBackgroundColor"].is_null());
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_ends_their_sessions() -> Result<()> {
    let app = build_test_app()?;
    let (token, user_id) = register(&app.server, "vanishing").await;

    assert!(app.database.delete_user(Uuid::parse_str(&user_id)?).await);

    let response = app
        .server
        .get(v1::users::CURRENT_THEME_CSS)
        .add_header("Authorization", bearer(&token))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_text("Unauthorized");
    Ok(())
}

#[tokio::test]
async fn stylesheet_for_user_deleted_after_auth_is_unauthorized() -> Result<()> {
    let app = build_test_app()?;
    let (token, user_id) = register(&app.server, "midrequest").await;

    let authenticated = app
        .state
        .auth_service
        .authenticate(&token)
        .await?
        .ok_or_else(|| anyhow!("fresh token did not authenticate"))?;
    assert!(app.database.delete_user(Uuid::parse_str(&user_id)?).await);

    let response = get_theme_css(
        State(app.state.clone()),
        Some(Extension(authenticated.user)),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(&body[..], b"Unauthorized");
    Ok(())
}

#[tokio::test]
async fn theme_json_requires_authentication() -> Result<()> {
    let app = build_test_app()?;

    let response = app.server.get(v1::users::CURRENT_THEME).await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"]["status"], 401);

    app.server
        .put(v1::users::CURRENT_THEME)
        .json(&json!({}))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    Ok(())
}

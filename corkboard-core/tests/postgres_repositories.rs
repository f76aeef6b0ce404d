#![cfg(feature = "db-tests")]

use anyhow::Result;
use chrono::{Duration, Utc};
use corkboard_core::database::PostgresDatabase;
use corkboard_core::database::ports::{
    sessions::SessionsRepository, theme::ThemePreferencesRepository,
    users::UsersRepository,
};
use corkboard_core::user::{User, UserSession, Username};
use corkboard_core::{CoreError, theme::render_theme_css};
use corkboard_model::UserThemePreferences;
use sqlx::PgPool;
use uuid::Uuid;

fn user(name: &str) -> User {
    User::new(Username::new(name).unwrap(), name)
}

#[sqlx::test(migrator = "corkboard_core::MIGRATOR")]
async fn duplicate_username_maps_to_conflict(pool: PgPool) -> Result<()> {
    let db = PostgresDatabase::from_pool(pool);
    let users = db.users();

    users.create_user_with_password(&user("dana"), "hash").await?;
    let err = users
        .create_user_with_password(&user("dana"), "hash")
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));
    Ok(())
}

#[sqlx::test(migrator = "corkboard_core::MIGRATOR")]
async fn new_users_have_null_theme_columns(pool: PgPool) -> Result<()> {
    let db = PostgresDatabase::from_pool(pool.clone());
    let erin = user("erin");
    db.users().create_user_with_password(&erin, "hash").await?;

    let nulls: (Option<String>, Option<String>, Option<String>) =
        sqlx::query_as(
            "SELECT theme_card_background_color, theme_card_hover_color, \
             theme_card_shadow_color FROM users WHERE id = $1",
        )
        .bind(erin.id)
        .fetch_one(&pool)
        .await?;
    assert_eq!(nulls, (None, None, None));

    let stored = db.themes().get_theme_preferences(erin.id).await?;
    assert_eq!(stored, Some(UserThemePreferences::default()));
    Ok(())
}

#[sqlx::test(migrator = "corkboard_core::MIGRATOR")]
async fn theme_replace_round_trips_and_clears(pool: PgPool) -> Result<()> {
    let db = PostgresDatabase::from_pool(pool);
    let themes = db.themes();
    let fay = user("fay");
    db.users().create_user_with_password(&fay, "hash").await?;

    let saved = UserThemePreferences::new(
        Some("#102030".into()),
        None,
        Some("rgba(0, 0, 0, 0.2)".into()),
    );
    assert!(themes.replace_theme_preferences(fay.id, &saved).await?);
    assert_eq!(
        themes.get_theme_preferences(fay.id).await?,
        Some(saved.clone())
    );

    let css = render_theme_css(&saved);
    assert!(css.contains("background-color: #102030 !important;"));
    assert!(css.contains("border-color: #061626 !important;"));

    assert!(
        themes
            .replace_theme_preferences(fay.id, &UserThemePreferences::default())
            .await?
    );
    let cleared = themes.get_theme_preferences(fay.id).await?;
    assert_eq!(cleared, Some(UserThemePreferences::default()));
    Ok(())
}

#[sqlx::test(migrator = "corkboard_core::MIGRATOR")]
async fn theme_queries_for_missing_user(pool: PgPool) -> Result<()> {
    let db = PostgresDatabase::from_pool(pool);
    let themes = db.themes();
    let ghost = Uuid::now_v7();

    assert_eq!(themes.get_theme_preferences(ghost).await?, None);
    assert!(
        !themes
            .replace_theme_preferences(ghost, &UserThemePreferences::default())
            .await?
    );
    Ok(())
}

#[sqlx::test(migrator = "corkboard_core::MIGRATOR")]
async fn sessions_honor_expiry_and_revocation(pool: PgPool) -> Result<()> {
    let db = PostgresDatabase::from_pool(pool);
    let sessions = db.sessions();
    let gus = user("gus");
    db.users().create_user_with_password(&gus, "hash").await?;

    let now = Utc::now();
    let session = UserSession {
        id: Uuid::now_v7(),
        user_id: gus.id,
        token_hash: "a1b2c3".into(),
        created_at: now,
        expires_at: now + Duration::hours(1),
        revoked: false,
    };
    sessions.create_session(&session).await?;

    let active = sessions.get_active_session("a1b2c3", now).await?;
    assert_eq!(active.map(|s| s.user_id), Some(gus.id));
    assert!(
        sessions
            .get_active_session("a1b2c3", now + Duration::hours(2))
            .await?
            .is_none()
    );

    sessions.revoke_session("a1b2c3").await?;
    assert!(sessions.get_active_session("a1b2c3", now).await?.is_none());
    Ok(())
}

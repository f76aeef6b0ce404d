use async_trait::async_trait;
use corkboard_model::UserThemePreferences;
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use crate::database::ports::theme::ThemePreferencesRepository;
use crate::error::Result;

#[derive(Debug, FromRow)]
struct ThemeRow {
    theme_card_background_color: Option<String>,
    theme_card_hover_color: Option<String>,
    theme_card_shadow_color: Option<String>,
}

/// Reads and overwrites the theme columns on `users`.
#[derive(Clone, Debug)]
pub struct PostgresThemePreferencesRepository {
    pool: PgPool,
}

impl PostgresThemePreferencesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThemePreferencesRepository for PostgresThemePreferencesRepository {
    async fn get_theme_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserThemePreferences>> {
        let row = sqlx::query_as::<_, ThemeRow>(
            r#"
            SELECT
                theme_card_background_color,
                theme_card_hover_color,
                theme_card_shadow_color
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| {
            UserThemePreferences::new(
                r.theme_card_background_color,
                r.theme_card_hover_color,
                r.theme_card_shadow_color,
            )
        }))
    }

    async fn replace_theme_preferences(
        &self,
        user_id: Uuid,
        preferences: &UserThemePreferences,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET theme_card_background_color = $2,
                theme_card_hover_color = $3,
                theme_card_shadow_color = $4,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(&preferences.card_background_color)
        .bind(&preferences.card_hover_color)
        .bind(&preferences.card_shadow_color)
        .execute(&self.pool)
        .await?;

        debug!(%user_id, rows = result.rows_affected(), "theme preferences replaced");
        Ok(result.rows_affected() > 0)
    }
}

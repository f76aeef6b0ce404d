use async_trait::async_trait;
use chrono::{DateTime, Utc};
use corkboard_model::UserThemePreferences;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::database::ports::users::UsersRepository;
use crate::{
    error::{CoreError, Result},
    user::User,
};

/// Row shape shared by every query that loads a full user.
#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub theme_card_background_color: Option<String>,
    pub theme_card_hover_color: Option<String>,
    pub theme_card_shadow_color: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            display_name: row.display_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
            theme: UserThemePreferences::new(
                row.theme_card_background_color,
                row.theme_card_hover_color,
                row.theme_card_shadow_color,
            ),
        }
    }
}

const SELECT_USER: &str = r#"
    SELECT
        id, username, display_name, created_at, updated_at,
        theme_card_background_color,
        theme_card_hover_color,
        theme_card_shadow_color
    FROM users
"#;

/// PostgreSQL-backed implementation of the `UsersRepository` port.
#[derive(Clone, Debug)]
pub struct PostgresUsersRepository {
    pool: PgPool,
}

impl PostgresUsersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UsersRepository for PostgresUsersRepository {
    async fn create_user_with_password(
        &self,
        user: &User,
        password_hash: &str,
    ) -> Result<()> {
        let mut tx = self.pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (
                id, username, display_name, created_at, updated_at,
                theme_card_background_color,
                theme_card_hover_color,
                theme_card_shadow_color
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.display_name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(&user.theme.card_background_color)
        .bind(&user.theme.card_hover_color)
        .bind(&user.theme.card_shadow_color)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error()
                && db_err.constraint() == Some("users_username_key")
            {
                return CoreError::Conflict(
                    "Username already exists".to_string(),
                );
            }
            CoreError::Database(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO user_credentials (user_id, password_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(user.id)
        .bind(password_hash)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(user_id = %user.id, username = %user.username, "created user");
        Ok(())
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(User::from))
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(User::from))
    }

    async fn get_user_password_hash(
        &self,
        user_id: Uuid,
    ) -> Result<Option<String>> {
        let hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM user_credentials WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(hash)
    }
}

//! Process-local adapter implementing every port over `tokio::sync::RwLock`
//! maps. Backs the test suites and `dev_mode` servers started without a
//! database URL; nothing survives a restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use corkboard_model::UserThemePreferences;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::ports::{
    sessions::SessionsRepository, theme::ThemePreferencesRepository,
    users::UsersRepository,
};
use crate::{
    error::{CoreError, Result},
    user::{User, UserSession},
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    credentials: HashMap<Uuid, String>,
    sessions: HashMap<String, UserSession>,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops a user and everything hanging off it, like the FK cascade does.
    pub async fn delete_user(&self, user_id: Uuid) -> bool {
        let mut tables = self.tables.write().await;
        tables.credentials.remove(&user_id);
        tables.sessions.retain(|_, session| session.user_id != user_id);
        tables.users.remove(&user_id).is_some()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }
}

#[async_trait]
impl UsersRepository for InMemoryDatabase {
    async fn create_user_with_password(
        &self,
        user: &User,
        password_hash: &str,
    ) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables
            .users
            .values()
            .any(|existing| existing.username == user.username)
        {
            return Err(CoreError::Conflict(
                "Username already exists".to_string(),
            ));
        }
        tables.users.insert(user.id, user.clone());
        tables
            .credentials
            .insert(user.id, password_hash.to_string());
        Ok(())
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn get_user_password_hash(
        &self,
        user_id: Uuid,
    ) -> Result<Option<String>> {
        Ok(self.tables.read().await.credentials.get(&user_id).cloned())
    }
}

#[async_trait]
impl SessionsRepository for InMemoryDatabase {
    async fn create_session(&self, session: &UserSession) -> Result<()> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&session.user_id) {
            return Err(CoreError::NotFound(format!(
                "user {}",
                session.user_id
            )));
        }
        tables
            .sessions
            .insert(session.token_hash.clone(), session.clone());
        Ok(())
    }

    async fn get_active_session(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserSession>> {
        Ok(self
            .tables
            .read()
            .await
            .sessions
            .get(token_hash)
            .filter(|session| session.is_active(now))
            .cloned())
    }

    async fn revoke_session(&self, token_hash: &str) -> Result<()> {
        if let Some(session) =
            self.tables.write().await.sessions.get_mut(token_hash)
        {
            session.revoked = true;
        }
        Ok(())
    }
}

#[async_trait]
impl ThemePreferencesRepository for InMemoryDatabase {
    async fn get_theme_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserThemePreferences>> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .get(&user_id)
            .map(|user| user.theme.clone()))
    }

    async fn replace_theme_preferences(
        &self,
        user_id: Uuid,
        preferences: &UserThemePreferences,
    ) -> Result<bool> {
        let mut tables = self.tables.write().await;
        match tables.users.get_mut(&user_id) {
            Some(user) => {
                user.theme = preferences.clone();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

use async_trait::async_trait;
use corkboard_model::UserThemePreferences;
use uuid::Uuid;

use crate::error::Result;

/// Access to the three theme columns on the user record.
#[async_trait]
pub trait ThemePreferencesRepository: Send + Sync {
    /// `None` when no such user exists.
    async fn get_theme_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserThemePreferences>>;

    /// Overwrites all three columns. Returns `false` when no such user exists.
    async fn replace_theme_preferences(
        &self,
        user_id: Uuid,
        preferences: &UserThemePreferences,
    ) -> Result<bool>;
}

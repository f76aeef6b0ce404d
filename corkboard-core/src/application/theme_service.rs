use std::sync::Arc;

use corkboard_model::UserThemePreferences;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    api::UpdateThemeRequest,
    database::ports::theme::ThemePreferencesRepository,
    error::Result,
    theme::render_theme_css,
};

/// Loads, renders, and replaces a user's card theme.
#[derive(Clone)]
pub struct ThemeService {
    themes: Arc<dyn ThemePreferencesRepository>,
}

impl std::fmt::Debug for ThemeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeService").finish_non_exhaustive()
    }
}

impl ThemeService {
    pub fn new(themes: Arc<dyn ThemePreferencesRepository>) -> Self {
        Self { themes }
    }

    pub async fn preferences_for(
        &self,
        user_id: Uuid,
    ) -> Result<Option<UserThemePreferences>> {
        self.themes.get_theme_preferences(user_id).await
    }

    /// Rendered stylesheet, or `None` when the user record is gone.
    pub async fn stylesheet_for(&self, user_id: Uuid) -> Result<Option<String>> {
        let Some(preferences) = self.themes.get_theme_preferences(user_id).await?
        else {
            debug!(%user_id, "theme requested for missing user");
            return Ok(None);
        };
        Ok(Some(render_theme_css(&preferences)))
    }

    /// Validates and stores all three values, overwriting whatever was there.
    ///
    /// Returns the stored preferences, or `None` when the user record is gone.
    /// Invalid colors fail with `CoreError::InvalidColor` and store nothing.
    pub async fn replace(
        &self,
        user_id: Uuid,
        request: UpdateThemeRequest,
    ) -> Result<Option<UserThemePreferences>> {
        let preferences = request.into_preferences()?;
        if !self
            .themes
            .replace_theme_preferences(user_id, &preferences)
            .await?
        {
            return Ok(None);
        }
        info!(%user_id, reset = preferences.is_unset(), "card theme saved");
        Ok(Some(preferences))
    }

    /// Clears all three columns so the defaults apply.
    pub async fn reset(&self, user_id: Uuid) -> Result<bool> {
        Ok(self
            .replace(user_id, UpdateThemeRequest::reset())
            .await?
            .is_some())
    }
}

use corkboard_model::{ColorParseError, ThemeField, UserThemePreferences};
use serde::{Deserialize, Serialize};

/// Standard API envelope for JSON endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn error(error: String) -> Self {
        Self {
            status: "error".to_string(),
            data: None,
            error: Some(error),
        }
    }
}

/// Whole-record overwrite of the current user's card colors.
///
/// `null` (or a blank string) clears the column so the server default
/// applies again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateThemeRequest {
    #[serde(rename = "themeCardBackgroundColor", default)]
    pub card_background_color: Option<String>,
    #[serde(rename = "themeCardHoverColor", default)]
    pub card_hover_color: Option<String>,
    #[serde(rename = "themeCardShadowColor", default)]
    pub card_shadow_color: Option<String>,
}

impl UpdateThemeRequest {
    /// All three columns back to null.
    pub fn reset() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ThemeField) -> Option<&str> {
        match field {
            ThemeField::CardBackground => self.card_background_color.as_deref(),
            ThemeField::CardHover => self.card_hover_color.as_deref(),
            ThemeField::CardShadow => self.card_shadow_color.as_deref(),
        }
    }

    /// Validates every provided value and returns the canonical form that
    /// gets persisted.
    pub fn into_preferences(self) -> Result<UserThemePreferences, ColorParseError> {
        let mut preferences = UserThemePreferences::default();
        for field in ThemeField::ALL {
            let canonical = match self.get(field).map(str::trim) {
                None | Some("") => None,
                Some(raw) => Some(field.canonicalize(raw)?),
            };
            preferences.set(field, canonical);
        }
        Ok(preferences)
    }
}

impl From<&UserThemePreferences> for UpdateThemeRequest {
    fn from(preferences: &UserThemePreferences) -> Self {
        Self {
            card_background_color: preferences.card_background_color.clone(),
            card_hover_color: preferences.card_hover_color.clone(),
            card_shadow_color: preferences.card_shadow_color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_null_values_clear_columns() {
        let request = UpdateThemeRequest {
            card_background_color: Some("   ".into()),
            card_hover_color: None,
            card_shadow_color: Some("".into()),
        };
        assert!(request.into_preferences().unwrap().is_unset());
    }

    #[test]
    fn values_are_stored_in_canonical_form() {
        let request = UpdateThemeRequest {
            card_background_color: Some(" #ABCDEF ".into()),
            card_hover_color: Some("#010203".into()),
            card_shadow_color: Some("rgba(0,0,0,0.3)".into()),
        };
        let prefs = request.into_preferences().unwrap();
        assert_eq!(prefs.card_background_color.as_deref(), Some("#abcdef"));
        assert_eq!(prefs.card_hover_color.as_deref(), Some("#010203"));
        assert_eq!(prefs.card_shadow_color.as_deref(), Some("rgba(0, 0, 0, 0.3)"));
    }

    #[test]
    fn shadow_that_only_fits_compact_is_accepted() {
        let request = UpdateThemeRequest {
            card_shadow_color: Some("rgba(10,20,30,0.5)".into()),
            ..Default::default()
        };
        let prefs = request.into_preferences().unwrap();
        assert_eq!(prefs.card_shadow_color.as_deref(), Some("rgba(10,20,30,0.5)"));
    }

    #[test]
    fn invalid_value_rejects_whole_request() {
        let request = UpdateThemeRequest {
            card_background_color: Some("#abcdef".into()),
            card_hover_color: Some("hotpink".into()),
            card_shadow_color: None,
        };
        assert!(request.into_preferences().is_err());
    }

    #[test]
    fn deserializes_explicit_nulls() {
        let request: UpdateThemeRequest = serde_json::from_str(
            r##"{"themeCardBackgroundColor":null,"themeCardHoverColor":"#ffffff","themeCardShadowColor":null}"##,
        )
        .unwrap();
        assert_eq!(request.card_hover_color.as_deref(), Some("#ffffff"));
        assert!(request.card_background_color.is_none());
    }
}

use corkboard_core::{
    api::UpdateThemeRequest,
    theme::{BORDER_ADJUSTMENT, adjust_color},
};
use corkboard_model::{ColorParseError, ThemeField, UserThemePreferences};

/// Editable copy of the card colors backing the settings panel.
///
/// Starts from the stored values (or the defaults where nothing is stored)
/// and is only written back through [`save_request`](Self::save_request) or
/// [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettingsDraft {
    background: String,
    hover: String,
    shadow: String,
}

impl Default for ThemeSettingsDraft {
    fn default() -> Self {
        Self::from_stored(&UserThemePreferences::default())
    }
}

impl ThemeSettingsDraft {
    pub fn from_stored(stored: &UserThemePreferences) -> Self {
        Self {
            background: stored.effective(ThemeField::CardBackground).to_string(),
            hover: stored.effective(ThemeField::CardHover).to_string(),
            shadow: stored.effective(ThemeField::CardShadow).to_string(),
        }
    }

    pub fn get(&self, field: ThemeField) -> &str {
        match field {
            ThemeField::CardBackground => &self.background,
            ThemeField::CardHover => &self.hover,
            ThemeField::CardShadow => &self.shadow,
        }
    }

    pub fn set(&mut self, field: ThemeField, value: impl Into<String>) {
        let slot = match field {
            ThemeField::CardBackground => &mut self.background,
            ThemeField::CardHover => &mut self.hover,
            ThemeField::CardShadow => &mut self.shadow,
        };
        *slot = value.into();
    }

    /// Discards local edits in favour of freshly loaded stored values.
    pub fn sync_from(&mut self, stored: &UserThemePreferences) {
        *self = Self::from_stored(stored);
    }

    /// Whole-record update carrying the current draft; blank values clear
    /// their column.
    pub fn save_request(&self) -> UpdateThemeRequest {
        let value = |raw: &str| {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        UpdateThemeRequest {
            card_background_color: value(&self.background),
            card_hover_color: value(&self.hover),
            card_shadow_color: value(&self.shadow),
        }
    }

    /// Puts the defaults back into the draft and returns the all-null update.
    pub fn reset(&mut self) -> UpdateThemeRequest {
        *self = Self::default();
        UpdateThemeRequest::reset()
    }

    /// Checks the draft against the same grammar the server enforces.
    pub fn validate(&self) -> Result<(), ColorParseError> {
        self.save_request().into_preferences().map(|_| ())
    }

    pub fn is_dirty(&self, stored: &UserThemePreferences) -> bool {
        *self != Self::from_stored(stored)
    }

    pub fn preview(&self) -> ThemePreview {
        ThemePreview {
            background: self.background.clone(),
            hover: self.hover.clone(),
            shadow: self.shadow.clone(),
            border: adjust_color(&self.background, BORDER_ADJUSTMENT),
        }
    }
}

/// Unsaved colors exposed as CSS custom properties for the preview card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreview {
    pub background: String,
    pub hover: String,
    pub shadow: String,
    pub border: String,
}

impl ThemePreview {
    pub fn variables(&self) -> [(&'static str, &str); 4] {
        [
            ("--card-bg", &self.background),
            ("--card-hover", &self.hover),
            ("--card-shadow", &self.shadow),
            ("--card-border", &self.border),
        ]
    }

    /// Inline `style` value for the preview element.
    pub fn style_attribute(&self) -> String {
        self.variables()
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

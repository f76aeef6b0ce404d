use crate::color::{ColorParseError, ThemeColor};

pub const DEFAULT_CARD_BACKGROUND: &str = "#f8f9fa";
pub const DEFAULT_CARD_HOVER: &str = "#f1f3f5";
pub const DEFAULT_CARD_SHADOW: &str = "rgba(0, 0, 0, 0.08)";

/// The three per-user card colors as persisted on the user record.
///
/// `None` means "use the default". Values are kept as raw strings because
/// that is what the store holds; anything that renders them must go through
/// [`ThemeField::parse`] first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserThemePreferences {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "themeCardBackgroundColor", default)
    )]
    pub card_background_color: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "themeCardHoverColor", default)
    )]
    pub card_hover_color: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "themeCardShadowColor", default)
    )]
    pub card_shadow_color: Option<String>,
}

impl UserThemePreferences {
    pub fn new(
        card_background_color: Option<String>,
        card_hover_color: Option<String>,
        card_shadow_color: Option<String>,
    ) -> Self {
        Self {
            card_background_color,
            card_hover_color,
            card_shadow_color,
        }
    }

    pub fn get(&self, field: ThemeField) -> Option<&str> {
        match field {
            ThemeField::CardBackground => self.card_background_color.as_deref(),
            ThemeField::CardHover => self.card_hover_color.as_deref(),
            ThemeField::CardShadow => self.card_shadow_color.as_deref(),
        }
    }

    pub fn set(&mut self, field: ThemeField, value: Option<String>) {
        let slot = match field {
            ThemeField::CardBackground => &mut self.card_background_color,
            ThemeField::CardHover => &mut self.card_hover_color,
            ThemeField::CardShadow => &mut self.card_shadow_color,
        };
        *slot = value;
    }

    /// Stored value when present and non-blank, otherwise the field default.
    pub fn effective(&self, field: ThemeField) -> &str {
        self.get(field)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(field.default_value())
    }

    /// True when every field falls back to its default.
    pub fn is_unset(&self) -> bool {
        ThemeField::ALL
            .iter()
            .all(|field| self.get(*field).is_none())
    }
}

/// Identifies one of the three theme columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeField {
    CardBackground,
    CardHover,
    CardShadow,
}

impl ThemeField {
    pub const ALL: [ThemeField; 3] =
        [Self::CardBackground, Self::CardHover, Self::CardShadow];

    pub const fn default_value(self) -> &'static str {
        match self {
            Self::CardBackground => DEFAULT_CARD_BACKGROUND,
            Self::CardHover => DEFAULT_CARD_HOVER,
            Self::CardShadow => DEFAULT_CARD_SHADOW,
        }
    }

    /// Column width in the user table.
    pub const fn max_len(self) -> usize {
        match self {
            Self::CardBackground | Self::CardHover => 7,
            Self::CardShadow => 20,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CardBackground => "card background color",
            Self::CardHover => "card hover color",
            Self::CardShadow => "card shadow color",
        }
    }

    /// Parses `value` against this field's grammar.
    ///
    /// Background and hover take `#rrggbb` only. The shadow also accepts
    /// `rgba(...)`. Column width is not checked here; values read back from
    /// the store already fit.
    pub fn parse(self, value: &str) -> Result<ThemeColor, ColorParseError> {
        let color: ThemeColor = value.parse()?;

        if !matches!(self, Self::CardShadow) && color.as_hex().is_none() {
            return Err(ColorParseError::HexRequired {
                field: self.label(),
                value: value.trim().to_string(),
            });
        }

        Ok(color)
    }

    /// Validates `value` and returns the string to persist.
    ///
    /// Prefers the spaced canonical rendering, then the compact `rgba(r,g,b,a)`
    /// one, then the trimmed input, taking the first that fits the column.
    pub fn canonicalize(self, value: &str) -> Result<String, ColorParseError> {
        let color = self.parse(value)?;
        let trimmed = value.trim();
        let max = self.max_len();

        let mut candidates = vec![color.to_string()];
        if let ThemeColor::Rgba(rgba) = color {
            candidates.push(rgba.compact());
        }
        candidates.push(trimmed.to_string());

        candidates
            .into_iter()
            .find(|candidate| candidate.len() <= max)
            .ok_or_else(|| ColorParseError::TooLong {
                field: self.label(),
                value: trimmed.to_string(),
                len: trimmed.len(),
                max,
            })
    }
}

use corkboard_model::{
    HexColor, RgbaColor, ThemeColor, ThemeField, UserThemePreferences,
};
use tracing::warn;

/// Channel shift applied to the card background to derive its border.
pub const BORDER_ADJUSTMENT: i32 = -10;

/// Shifts each channel of a `#rrggbb` color by `amount`, clamped to `0..=255`.
///
/// Anything that is not exactly `#` followed by six hex digits (rgba(),
/// named colors, short or malformed hex) is returned unchanged.
pub fn adjust_color(color: &str, amount: i32) -> String {
    match HexColor::parse_strict(color) {
        Some(hex) => hex.adjust(amount).to_string(),
        None => color.to_string(),
    }
}

/// Card colors after the stored-or-default rule and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTheme {
    pub background: HexColor,
    pub hover: HexColor,
    pub shadow: ThemeColor,
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Self {
            background: HexColor::from_rgb(0xf8, 0xf9, 0xfa),
            hover: HexColor::from_rgb(0xf1, 0xf3, 0xf5),
            shadow: ThemeColor::Rgba(RgbaColor {
                red: 0,
                green: 0,
                blue: 0,
                alpha: 0.08,
            }),
        }
    }
}

impl ResolvedTheme {
    /// Resolves stored preferences. Values that fail their field grammar
    /// are dropped in favour of the default so they never reach the CSS.
    pub fn resolve(preferences: &UserThemePreferences) -> Self {
        let defaults = Self::default();

        Self {
            background: resolve_field(preferences, ThemeField::CardBackground)
                .and_then(|color| color.as_hex())
                .unwrap_or(defaults.background),
            hover: resolve_field(preferences, ThemeField::CardHover)
                .and_then(|color| color.as_hex())
                .unwrap_or(defaults.hover),
            shadow: resolve_field(preferences, ThemeField::CardShadow)
                .unwrap_or(defaults.shadow),
        }
    }

    pub fn border(&self) -> HexColor {
        self.background.adjust(BORDER_ADJUSTMENT)
    }

    pub fn to_css(&self) -> String {
        let background = self.background;
        let border = self.border();
        let hover = self.hover;
        let shadow = self.shadow;

        format!(
            r#"/* Corkboard user theme - generated from saved card preferences */

/* Card background colors */
.ui.card,
[class*="card"],
[data-testid*="card"] {{
  background-color: {background} !important;
  border-color: {border} !important;
  box-shadow: 0 1px 3px {shadow} !important;
}}

/* Card hover states */
.ui.card:hover,
[class*="card"]:hover,
[data-testid*="card"]:hover {{
  background-color: {hover} !important;
  box-shadow: 0 2px 6px {shadow} !important;
  transform: translateY(-1px);
  transition: all 0.2s ease;
}}
"#
        )
    }
}

/// Renders the card stylesheet for a user's stored preferences.
pub fn render_theme_css(preferences: &UserThemePreferences) -> String {
    ResolvedTheme::resolve(preferences).to_css()
}

fn resolve_field(
    preferences: &UserThemePreferences,
    field: ThemeField,
) -> Option<ThemeColor> {
    let raw = preferences
        .get(field)
        .map(str::trim)
        .filter(|value| !value.is_empty())?;

    match field.parse(raw) {
        Ok(color) => Some(color),
        Err(error) => {
            warn!(
                field = field.label(),
                value = raw,
                %error,
                "stored theme color rejected; using default"
            );
            None
        }
    }
}

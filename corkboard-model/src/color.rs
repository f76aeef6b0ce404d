use std::{fmt, str::FromStr};

/// Errors produced when a user-supplied string is not a color the theme
/// renderer is willing to interpolate into CSS.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color value is empty")]
    Empty,

    #[error("expected `#rrggbb`, got `{0}`")]
    InvalidHex(String),

    #[error("expected `rgba(r, g, b, a)` with four components, got {0}")]
    ComponentCount(usize),

    #[error(
        "invalid rgba channel `{0}`: expected an integer between 0 and 255"
    )]
    InvalidChannel(String),

    #[error("invalid rgba alpha `{0}`: expected a number between 0 and 1")]
    InvalidAlpha(String),

    #[error("unrecognized color `{0}`: use `#rrggbb` or `rgba(r, g, b, a)`")]
    Unrecognized(String),

    #[error("{field} only accepts `#rrggbb` colors, got `{value}`")]
    HexRequired { field: &'static str, value: String },

    #[error("{field} is limited to {max} characters, `{value}` has {len}")]
    TooLong {
        field: &'static str,
        value: String,
        len: usize,
        max: usize,
    },
}

/// A 24-bit RGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(u32);

impl HexColor {
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Parses exactly `#` followed by six hex digits, nothing else.
    pub fn parse_strict(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }

    pub const fn rgb(self) -> u32 {
        self.0
    }

    pub const fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// Shifts every channel by `amount`, clamping each to `0..=255`.
    ///
    /// Negative amounts darken, positive amounts lighten. Channels are
    /// adjusted independently, so a channel already at a bound stays there.
    pub fn adjust(self, amount: i32) -> Self {
        let shift = |channel: u8| {
            i32::from(channel).saturating_add(amount).clamp(0, 255) as u8
        };
        let (red, green, blue) = self.channels();
        Self::from_rgb(shift(red), shift(green), shift(blue))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        Self::parse_strict(trimmed)
            .ok_or_else(|| ColorParseError::InvalidHex(trimmed.to_string()))
    }
}

/// An `rgba(r, g, b, a)` color, typically used for translucent shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl RgbaColor {
    pub fn new(
        red: u8,
        green: u8,
        blue: u8,
        alpha: f32,
    ) -> Result<Self, ColorParseError> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(ColorParseError::InvalidAlpha(alpha.to_string()));
        }
        Ok(Self {
            red,
            green,
            blue,
            alpha,
        })
    }

    /// `rgba(r,g,b,a)` without separating spaces.
    pub fn compact(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for RgbaColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let inner = trimmed
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("rgba("))
            .and_then(|_| trimmed[5..].strip_suffix(')'))
            .ok_or_else(|| ColorParseError::Unrecognized(trimmed.to_string()))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [red, green, blue, alpha] = parts.as_slice() else {
            return Err(ColorParseError::ComponentCount(parts.len()));
        };

        let channel = |raw: &str| {
            raw.parse::<u8>()
                .map_err(|_| ColorParseError::InvalidChannel(raw.to_string()))
        };
        let alpha_value = alpha
            .parse::<f32>()
            .map_err(|_| ColorParseError::InvalidAlpha(alpha.to_string()))?;

        Self::new(channel(red)?, channel(green)?, channel(blue)?, alpha_value)
            .map_err(|_| ColorParseError::InvalidAlpha(alpha.to_string()))
    }
}

/// Any color value a theme field may hold once validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeColor {
    Hex(HexColor),
    Rgba(RgbaColor),
}

impl ThemeColor {
    pub fn as_hex(&self) -> Option<HexColor> {
        match self {
            Self::Hex(hex) => Some(*hex),
            Self::Rgba(_) => None,
        }
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => hex.fmt(f),
            Self::Rgba(rgba) => rgba.fmt(f),
        }
    }
}

impl FromStr for ThemeColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(ColorParseError::Empty)
        } else if trimmed.starts_with('#') {
            trimmed.parse().map(Self::Hex)
        } else {
            trimmed.parse().map(Self::Rgba)
        }
    }
}

impl From<HexColor> for ThemeColor {
    fn from(value: HexColor) -> Self {
        Self::Hex(value)
    }
}

impl From<RgbaColor> for ThemeColor {
    fn from(value: RgbaColor) -> Self {
        Self::Rgba(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_and_renders_lowercase() {
        let color: HexColor = "#F8F9FA".parse().unwrap();
        assert_eq!(color.channels(), (248, 249, 250));
        assert_eq!(color.to_string(), "#f8f9fa");
    }

    #[test]
    fn hex_rejects_wrong_length_and_charset() {
        assert!("#fff".parse::<HexColor>().is_err());
        assert!("#f8f9fa0".parse::<HexColor>().is_err());
        assert!("#zzzzzz".parse::<HexColor>().is_err());
        assert!("f8f9fa".parse::<HexColor>().is_err());
        assert_eq!("  ".parse::<HexColor>(), Err(ColorParseError::Empty));
    }

    #[test]
    fn hex_adjust_clamps_per_channel() {
        let black = HexColor::from_rgb(0, 0, 0);
        assert_eq!(black.adjust(-10), black);

        let near_white = HexColor::from_rgb(0xff, 0xfe, 0xfd);
        assert_eq!(near_white.adjust(10).to_string(), "#ffffff");

        let mixed = HexColor::from_rgb(5, 128, 250);
        assert_eq!(mixed.adjust(-10).channels(), (0, 118, 240));
        assert_eq!(mixed.adjust(i32::MIN).channels(), (0, 0, 0));
    }

    #[test]
    fn hex_pads_small_values() {
        assert_eq!(HexColor::from_rgb(0, 0, 0x0a).to_string(), "#00000a");
    }

    #[test]
    fn rgba_parses_compact_and_spaced_forms() {
        let compact: RgbaColor = "rgba(0,0,0,0.08)".parse().unwrap();
        let spaced: RgbaColor = " RGBA( 0 , 0 , 0 , 0.08 ) ".parse().unwrap();
        assert_eq!(compact, spaced);
        assert_eq!(compact.to_string(), "rgba(0, 0, 0, 0.08)");
        assert_eq!(spaced.compact(), "rgba(0,0,0,0.08)");
    }

    #[test]
    fn rgba_rejects_out_of_range_components() {
        assert_eq!(
            "rgba(256, 0, 0, 0.5)".parse::<RgbaColor>(),
            Err(ColorParseError::InvalidChannel("256".into()))
        );
        assert_eq!(
            "rgba(0, 0, 0, 1.5)".parse::<RgbaColor>(),
            Err(ColorParseError::InvalidAlpha("1.5".into()))
        );
        assert_eq!(
            "rgba(0, 0, 0)".parse::<RgbaColor>(),
            Err(ColorParseError::ComponentCount(3))
        );
        assert!("rgba(0, 0, 0, NaN)".parse::<RgbaColor>().is_err());
    }

    #[test]
    fn theme_color_dispatches_on_prefix() {
        assert!(matches!(
            "#112233".parse::<ThemeColor>(),
            Ok(ThemeColor::Hex(_))
        ));
        assert!(matches!(
            "rgba(1, 2, 3, 0.4)".parse::<ThemeColor>(),
            Ok(ThemeColor::Rgba(_))
        ));
        assert!(matches!(
            "red".parse::<ThemeColor>(),
            Err(ColorParseError::Unrecognized(_))
        ));
        assert!(matches!(
            "red; } body { display: none".parse::<ThemeColor>(),
            Err(ColorParseError::Unrecognized(_))
        ));
    }
}

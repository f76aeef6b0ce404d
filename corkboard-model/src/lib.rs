//! Core data model definitions shared across Corkboard crates.
//!
//! The theming model is intentionally small: three optional color strings
//! per user, a fixed set of defaults, and validated color value types that
//! everything rendering CSS goes through.
#![allow(missing_docs)]

pub mod color;
pub mod theme;

pub use color::{ColorParseError, HexColor, RgbaColor, ThemeColor};
pub use theme::{
    DEFAULT_CARD_BACKGROUND, DEFAULT_CARD_HOVER, DEFAULT_CARD_SHADOW,
    ThemeField, UserThemePreferences,
};

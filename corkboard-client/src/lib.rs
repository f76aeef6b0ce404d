//! Client-side pieces of Corkboard card theming.
//!
//! - [`settings::ThemeSettingsDraft`]: the settings panel's editable copy of
//!   the three card colors, with live preview variables
//! - [`injector::ThemeStylesheet`]: keeps a single `<link>` to the user's
//!   theme stylesheet in sync with the signed-in user
//! - [`api::ThemeApiClient`]: reqwest client for the theme endpoints

pub mod api;
pub mod error;
pub mod injector;
pub mod settings;

pub use api::ThemeApiClient;
pub use error::ClientError;
pub use injector::{StylesheetHost, THEME_LINK_ID, ThemeStylesheet};
pub use settings::{ThemePreview, ThemeSettingsDraft};

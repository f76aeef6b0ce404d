//! Configuration loading for Corkboard.
//!
//! Values come from, in increasing precedence: built-in defaults, an
//! optional `corkboard.toml`, and environment variables (including a `.env`
//! file picked up through `dotenvy`). Loading never logs; callers decide how
//! to surface the returned [`ConfigWarnings`].

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    AuthConfig, Config, ConfigMetadata, CorsConfig, DatabaseConfig,
    ServerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};

pub use corkboard_config::{
    AuthConfig, Config, ConfigLoad, ConfigLoadError, ConfigLoader,
    ConfigMetadata, ConfigWarnings, CorsConfig, DatabaseConfig, ServerConfig,
};

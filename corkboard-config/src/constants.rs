/// Placeholder pepper used when none is configured. Only acceptable for
/// local development; the loader warns whenever it is in effect.
pub const DEFAULT_PASSWORD_PEPPER: &str = "corkboard-dev-pepper-change-me";

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_DAYS: i64 = 30;

pub const CONFIG_PATH_ENV: &str = "CORKBOARD_CONFIG";

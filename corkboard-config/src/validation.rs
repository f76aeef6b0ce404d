use thiserror::Error;
use url::Url;

use crate::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("CORS wildcard origins are not allowed when DEV_MODE is false")]
    DangerousCorsWildcard,
    #[error("SESSION_TTL_DAYS must be positive, got {0}")]
    InvalidSessionTtl(i64),
    #[error("AUTH_PASSWORD_PEPPER must not be empty")]
    EmptyPepper,
    #[error("DATABASE_URL must use the postgres:// scheme, got `{scheme}`")]
    UnsupportedDatabaseScheme { scheme: String },
    #[error("invalid DATABASE_URL")]
    InvalidDatabaseUrl {
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.auth.password_pepper.is_empty() {
        return Err(ConfigGuardRailError::EmptyPepper);
    }

    if config.auth.session_ttl_days <= 0 {
        return Err(ConfigGuardRailError::InvalidSessionTtl(
            config.auth.session_ttl_days,
        ));
    }

    if !config.dev_mode && config.cors.is_wildcard_included() {
        return Err(ConfigGuardRailError::DangerousCorsWildcard);
    }

    if config.auth.is_default_pepper() {
        warnings.push_with_hint(
            "AUTH_PASSWORD_PEPPER is the built-in placeholder; password hashes are not protected by a server secret",
            "Set AUTH_PASSWORD_PEPPER to a long random value before storing real accounts",
        );
    }

    match config.database.url.as_deref() {
        Some(raw) => {
            let parsed = Url::parse(raw).map_err(|source| {
                ConfigGuardRailError::InvalidDatabaseUrl { source }
            })?;
            if !matches!(parsed.scheme(), "postgres" | "postgresql") {
                return Err(ConfigGuardRailError::UnsupportedDatabaseScheme {
                    scheme: parsed.scheme().to_string(),
                });
            }
        }
        None if config.dev_mode => warnings.push_with_hint(
            "DATABASE_URL not configured; accounts and themes are kept in memory",
            "Set DATABASE_URL to persist data across restarts",
        ),
        None => {}
    }

    Ok(warnings)
}

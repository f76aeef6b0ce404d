use std::{fmt, sync::Arc};

use chrono::Duration;
use corkboard_core::{
    application::{AppUnitOfWork, AuthService, ThemeService},
    auth::{AuthCrypto, AuthCryptoError},
    database::PostgresDatabase,
};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub unit_of_work: Arc<AppUnitOfWork>,
    /// `None` when running on the in-memory store.
    pub postgres: Option<Arc<PostgresDatabase>>,
    pub config: Arc<Config>,
    pub auth_service: Arc<AuthService>,
    pub theme_service: Arc<ThemeService>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("unit_of_work", &self.unit_of_work)
            .field("postgres", &self.postgres.is_some())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wires the services on top of a unit of work.
    pub fn new(
        config: Arc<Config>,
        unit_of_work: Arc<AppUnitOfWork>,
        postgres: Option<Arc<PostgresDatabase>>,
    ) -> Result<Self, AuthCryptoError> {
        let crypto = Arc::new(AuthCrypto::new(&config.auth.password_pepper)?);
        let auth_service = AuthService::new(
            unit_of_work.users.clone(),
            unit_of_work.sessions.clone(),
            crypto,
        )
        .with_session_ttl(Duration::days(config.auth.session_ttl_days));
        let theme_service = ThemeService::new(unit_of_work.themes.clone());

        Ok(Self {
            unit_of_work,
            postgres,
            config,
            auth_service: Arc::new(auth_service),
            theme_service: Arc::new(theme_service),
        })
    }

    pub fn unit_of_work(&self) -> Arc<AppUnitOfWork> {
        Arc::clone(&self.unit_of_work)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

use std::any::type_name_of_val;
use std::fmt;
use std::sync::Arc;

use crate::database::InMemoryDatabase;
#[cfg(feature = "database")]
use crate::database::PostgresDatabase;
use crate::database::ports::{
    sessions::SessionsRepository, theme::ThemePreferencesRepository,
    users::UsersRepository,
};

/// Aggregates all repository ports used by application services.
#[derive(Clone)]
pub struct AppUnitOfWork {
    pub users: Arc<dyn UsersRepository>,
    pub sessions: Arc<dyn SessionsRepository>,
    pub themes: Arc<dyn ThemePreferencesRepository>,
}

impl fmt::Debug for AppUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppUnitOfWork")
            .field("users", &type_name_of_val(self.users.as_ref()))
            .field("sessions", &type_name_of_val(self.sessions.as_ref()))
            .field("themes", &type_name_of_val(self.themes.as_ref()))
            .finish()
    }
}

impl AppUnitOfWork {
    #[cfg(feature = "database")]
    pub fn from_postgres(postgres: &PostgresDatabase) -> Self {
        Self {
            users: Arc::new(postgres.users()),
            sessions: Arc::new(postgres.sessions()),
            themes: Arc::new(postgres.themes()),
        }
    }

    pub fn in_memory(database: InMemoryDatabase) -> Self {
        Self {
            users: Arc::new(database.clone()),
            sessions: Arc::new(database.clone()),
            themes: Arc::new(database),
        }
    }
}

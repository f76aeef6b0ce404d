//! PostgreSQL infrastructure adapters implementing the database ports.

pub mod repositories;

pub use repositories::sessions::PostgresSessionsRepository;
pub use repositories::theme::PostgresThemePreferencesRepository;
pub use repositories::users::PostgresUsersRepository;

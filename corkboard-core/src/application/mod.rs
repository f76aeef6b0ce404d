pub mod auth_service;
pub mod theme_service;
pub mod unit_of_work;

pub use auth_service::{AuthService, AuthenticatedUser, DEFAULT_SESSION_TTL_DAYS};
pub use theme_service::ThemeService;
pub use unit_of_work::AppUnitOfWork;

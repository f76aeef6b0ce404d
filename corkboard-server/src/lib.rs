//! # Corkboard Server
//!
//! axum server for accounts and per-user card themes. The interesting
//! endpoint is `GET /api/v1/users/me/theme.css`, which renders the caller's
//! stored card colors into a stylesheet the web client links into the page.
//!
//! Storage is PostgreSQL in normal operation. A `DEV_MODE` server started
//! without `DATABASE_URL` keeps everything in memory.

pub mod infra;
pub mod routes;
pub mod users;

pub use infra::app_state::AppState;
pub use infra::startup::create_app;

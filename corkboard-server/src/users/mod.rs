pub mod auth;
pub mod theme_handlers;

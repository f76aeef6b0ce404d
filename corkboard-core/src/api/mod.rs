pub mod routes;
pub mod types;

pub use types::{ApiResponse, UpdateThemeRequest};

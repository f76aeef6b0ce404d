pub mod sessions;
pub mod theme;
pub mod users;

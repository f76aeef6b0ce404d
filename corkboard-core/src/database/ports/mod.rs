//! Repository ports (interfaces) grouped by concern.
//! Implementations live under `database::infrastructure`.

pub mod sessions;
pub mod theme;
pub mod users;

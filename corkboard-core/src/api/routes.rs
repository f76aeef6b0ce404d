macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned API route definitions shared across Corkboard services
pub mod v1 {
    pub const ROOT: &str = "/api/v1";
    pub const VERSION: &str = "v1";

    pub mod auth {
        pub const REGISTER: &str = v1_path!("/auth/register");
        pub const LOGIN: &str = v1_path!("/auth/login");
        pub const LOGOUT: &str = v1_path!("/auth/logout");
    }

    pub mod users {
        pub const CURRENT: &str = v1_path!("/users/me");
        pub const CURRENT_THEME: &str = v1_path!("/users/me/theme");
        pub const CURRENT_THEME_CSS: &str = v1_path!("/users/me/theme.css");
    }
}

/// Helpers for turning route templates into router-relative paths.
pub mod utils {
    use super::v1;

    /// Strips the `/api/v1` prefix so the path can be nested under it.
    pub fn relative(path: &'static str) -> &'static str {
        path.strip_prefix(v1::ROOT).unwrap_or(path)
    }
}

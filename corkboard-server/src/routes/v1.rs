use axum::{
    Router, middleware,
    routing::{get, post},
};
use corkboard_core::api::routes::{utils::relative, v1};

use crate::{
    AppState,
    users::{auth, theme_handlers},
};

/// Create all v1 API routes
pub fn create_v1_router(state: AppState) -> Router<AppState> {
    Router::new()
        // Public authentication endpoints
        .route(relative(v1::auth::REGISTER), post(auth::handlers::register))
        .route(relative(v1::auth::LOGIN), post(auth::handlers::login))
        .merge(create_stylesheet_routes(state.clone()))
        .merge(create_protected_routes(state))
}

/// The stylesheet decides its own 401 so a `<link>` gets a plain-text body.
fn create_stylesheet_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            relative(v1::users::CURRENT_THEME_CSS),
            get(theme_handlers::get_theme_css),
        )
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::middleware::optional_auth_middleware,
        ))
}

/// Create protected routes that require authentication
fn create_protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(relative(v1::auth::LOGOUT), post(auth::handlers::logout))
        .route(
            relative(v1::users::CURRENT),
            get(auth::handlers::get_current_user),
        )
        .route(
            relative(v1::users::CURRENT_THEME),
            get(theme_handlers::get_theme).put(theme_handlers::update_theme),
        )
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::middleware::auth_middleware,
        ))
}

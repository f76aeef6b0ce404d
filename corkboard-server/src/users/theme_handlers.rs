use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use corkboard_core::{
    api::{ApiResponse, UpdateThemeRequest},
    user::User,
};
use corkboard_model::UserThemePreferences;
use tracing::debug;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

const CSS_CONTENT_TYPE: &str = "text/css; charset=utf-8";

fn unauthorized_text() -> Response {
    (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
}

/// Renders the caller's card stylesheet.
///
/// A missing session and a user row that has since disappeared both answer
/// `401` with a plain-text body; the store is read once per request.
pub async fn get_theme_css(
    State(state): State<AppState>,
    user: Option<Extension<User>>,
) -> AppResult<Response> {
    let Some(Extension(user)) = user else {
        return Ok(unauthorized_text());
    };

    let Some(css) = state.theme_service.stylesheet_for(user.id).await? else {
        debug!(user_id = %user.id, "theme stylesheet requested for missing user");
        return Ok(unauthorized_text());
    };

    Ok((
        [
            (header::CONTENT_TYPE, CSS_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-store"),
        ],
        css,
    )
        .into_response())
}

pub async fn get_theme(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> AppResult<Json<ApiResponse<UserThemePreferences>>> {
    let preferences = state
        .theme_service
        .preferences_for(user.id)
        .await?
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;
    Ok(Json(ApiResponse::success(preferences)))
}

/// Overwrites all three card colors. Invalid values are rejected with 400
/// and nothing is stored.
pub async fn update_theme(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(request): Json<UpdateThemeRequest>,
) -> AppResult<Json<ApiResponse<UserThemePreferences>>> {
    let preferences = state
        .theme_service
        .replace(user.id, request)
        .await?
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;
    Ok(Json(ApiResponse::success(preferences)))
}

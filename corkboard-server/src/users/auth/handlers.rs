use axum::{Extension, Json, extract::State, http::StatusCode};
use corkboard_core::{
    api::ApiResponse,
    user::{AuthToken, LoginRequest, RegisterRequest, User, UserSession},
};

use crate::infra::{app_state::AppState, errors::AppResult};

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<Json<ApiResponse<AuthToken>>> {
    let token = state.auth_service.register(request).await?;
    Ok(Json(ApiResponse::success(token)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthToken>>> {
    let token = state.auth_service.login(request).await?;
    Ok(Json(ApiResponse::success(token)))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<UserSession>,
) -> AppResult<StatusCode> {
    state.auth_service.logout(&session).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_current_user(
    Extension(user): Extension<User>,
) -> Json<ApiResponse<User>> {
    Json(ApiResponse::success(user))
}

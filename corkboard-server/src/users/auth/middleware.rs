use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use corkboard_core::application::AuthenticatedUser;
use tracing::{debug, error};

use crate::infra::{app_state::AppState, errors::AppError};

/// Rejects the request with a JSON 401 unless a live session resolves.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request)
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    let AuthenticatedUser { user, session } = state
        .auth_service
        .authenticate(&token)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid or expired session"))?;

    request.extensions_mut().insert(user);
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

/// Attaches the user when the token resolves; otherwise passes the request
/// through untouched.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = extract_bearer_token(&request);
    if let Some(token) = token {
        let resolved = state.auth_service.authenticate(&token).await;
        match resolved {
            Ok(Some(AuthenticatedUser { user, session })) => {
                request.extensions_mut().insert(user);
                request.extensions_mut().insert(session);
            }
            Ok(None) => debug!("bearer token did not resolve to a session"),
            Err(err) => error!(error = %err, "session lookup failed"),
        }
    }

    next.run(request).await
}

pub fn extract_bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}

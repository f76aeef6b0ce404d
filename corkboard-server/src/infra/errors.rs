use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use corkboard_core::CoreError;
use corkboard_model::ColorParseError;
use serde_json::json;
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        }));

        (self.status, body).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(msg) => Self::not_found(msg),
            CoreError::Conflict(msg) => Self::conflict(msg),
            CoreError::InvalidInput(msg) => Self::bad_request(msg),
            CoreError::InvalidColor(err) => err.into(),
            CoreError::InvalidCredentials => {
                Self::unauthorized("Invalid username or password")
            }
            CoreError::Database(err) => err.into(),
            CoreError::Migration(err) => {
                tracing::error!(error = %err, "migration failed");
                Self::internal("Database migration failed")
            }
            CoreError::Crypto(msg) | CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "internal failure");
                Self::internal("Internal server error")
            }
        }
    }
}

impl From<ColorParseError> for AppError {
    fn from(err: ColorParseError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = ?err, "database operation failed");
        Self::internal("Database operation failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_statuses() {
        let cases = [
            (CoreError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (CoreError::Conflict("x".into()), StatusCode::CONFLICT),
            (CoreError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (
                CoreError::InvalidColor(ColorParseError::Empty),
                StatusCode::BAD_REQUEST,
            ),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                CoreError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status, status);
        }
    }

    #[test]
    fn internal_details_are_not_leaked() {
        let err = AppError::from(CoreError::Crypto("pepper rejected".into()));
        assert_eq!(err.message, "Internal server error");
    }
}

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, header},
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    infra::{app_state::AppState, config::CorsConfig, errors::AppResult},
    routes::create_api_router,
};

/// Full application router: health, versioned API, CORS, and request tracing.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config().cors, state.config().dev_mode);

    Router::new()
        .route("/health", get(health_handler))
        .merge(create_api_router(state.clone()))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive in dev, allow-list otherwise.
pub fn build_cors_layer(cors: &CorsConfig, dev_mode: bool) -> CorsLayer {
    if dev_mode {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

async fn health_handler(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let database = match &state.postgres {
        Some(postgres) => {
            sqlx::query("SELECT 1").execute(postgres.pool()).await?;
            let stats = postgres.pool_stats();
            json!({
                "backend": "postgres",
                "pool_size": stats.size,
                "idle": stats.idle,
                "max_size": stats.max_size,
            })
        }
        None => json!({ "backend": "memory" }),
    };

    Ok(Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
    })))
}

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use std::sync::Arc;

use crate::store::Persistence;

/// Shared state handed to every route
#[derive(Debug, Clone)]
pub struct AppState {
    pub persistence: Persistence,
}

pub type SharedState = Arc<AppState>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub timestamp: String,
}

pub async fn health_check(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        provider: state.persistence.provider().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Readiness check that reaches the database
pub async fn database_health(
    State(state): State<SharedState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.persistence.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            status: "ready".to_string(),
            provider: state.persistence.provider().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            log::warn!("Database health check failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

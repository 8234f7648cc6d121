use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = database_reachable(&state).await;
    let broadcaster = &state.streams.broadcaster;
    let subscribers = broadcaster.total_subscribers().await;
    let mut streams = broadcaster.active_streams().await;
    streams.sort();

    let (status, overall, database) = if database_ok {
        (StatusCode::OK, "healthy", "operational")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };

    let health = json!({
        "status": overall,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "streams": {
                "channels": streams.len(),
                "subscribers": subscribers,
                "active": streams,
            },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe; not ready while shutting down or without a database
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.streams.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }

    if !database_reachable(&state).await {
        return (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}

async fn database_reachable(state: &AppState) -> bool {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Database health check failed: {}", e);
            false
        }
    }
}

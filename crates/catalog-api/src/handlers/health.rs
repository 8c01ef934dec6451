//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::HealthResponse;
use crate::error::status_for;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let Some(database) = &state.database else {
        return (StatusCode::OK, Json(HealthResponse::with_status("ok")));
    };

    match database.health_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::with_status("ok"))),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            let (status, _) = status_for(e.kind);
            (status, Json(HealthResponse::with_status("degraded")))
        }
    }
}

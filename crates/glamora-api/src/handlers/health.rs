//! Health check handlers
//!
//! Liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use glamora_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness with database and Redis checks
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let ctx = state.service_context();

    let db_healthy = database_reachable(ctx.pool()).await;
    let redis_healthy = ctx.redis_pool().health_check().await.is_ok();

    if !(db_healthy && redis_healthy) {
        tracing::warn!(db_healthy, redis_healthy, "Readiness check failed");
    }

    let status = if db_healthy && redis_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse::ready(db_healthy, redis_healthy)))
}

async fn database_reachable(pool: &glamora_db::PgPool) -> bool {
    pool.acquire().await.is_ok()
}

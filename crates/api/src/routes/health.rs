use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    judges: usize,
    responses: Option<usize>,
}

#[derive(Serialize)]
struct VersionResponse {
    version: &'static str,
}

/// Reports `degraded` with a 503 when the response store cannot be listed.
async fn health_check(State(state): State<Arc<ApiState>>) -> (StatusCode, Json<HealthResponse>) {
    let judges = state.service.roster().len();

    match state.service.responses().await {
        Ok(responses) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                judges,
                responses: Some(responses.len()),
            }),
        ),
        Err(err) => {
            warn!("Health check could not read the response store: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    judges,
                    responses: None,
                }),
            )
        }
    }
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use defensesync_core::models::response::{Response, ResponseQuery};

use crate::{ApiState, middleware::error_handling::AppError};

/// Returns the judge's stored response, or `null` when there is none yet.
///
/// # Endpoint
///
/// ```text
/// GET /response?judgeId=7f8a9b1c-2d3e-4f5a-6b7c-8d9e0f1a2b3c
/// ```
#[axum::debug_handler]
pub async fn get_response(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ResponseQuery>,
) -> Result<Json<Option<Response>>, AppError> {
    let response = state.service.response_for(&query.judge_id).await?;
    Ok(Json(response))
}

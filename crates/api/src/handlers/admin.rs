use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, extract::State};
use defensesync_core::models::{judge::JudgeLink, response::Response};

use crate::{ApiState, middleware::error_handling::AppError};

/// Every judge with their form link and submission time, if any
#[axum::debug_handler]
pub async fn list_judges(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<JudgeLink>>, AppError> {
    let links = state.service.judge_links(&state.public_base_url).await?;
    Ok(Json(links))
}

#[axum::debug_handler]
pub async fn list_responses(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<BTreeMap<String, Response>>, AppError> {
    Ok(Json(state.service.responses().await?))
}

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use defensesync_core::{
    errors::ScheduleError,
    models::{calendar::CalendarDay, judge::Judge},
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Candidate days and slots. Holiday days are included with their flags set.
#[axum::debug_handler]
pub async fn get_calendar(State(state): State<Arc<ApiState>>) -> Json<Vec<CalendarDay>> {
    Json(state.service.calendar().days().to_vec())
}

#[axum::debug_handler]
pub async fn get_judge(
    State(state): State<Arc<ApiState>>,
    Path(judge_id): Path<String>,
) -> Result<Json<Judge>, AppError> {
    let judge = state
        .service
        .roster()
        .get(&judge_id)
        .cloned()
        .ok_or_else(|| ScheduleError::NotFound(format!("Judge with ID {} not found", judge_id)))?;

    Ok(Json(judge))
}

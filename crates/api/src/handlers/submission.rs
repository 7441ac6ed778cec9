//! # Submission Handler
//!
//! Accepts a judge's availability form. The body is deserialized by the JSON
//! extractor first, so malformed payloads are rejected before any validation
//! or storage happens.

use std::sync::Arc;

use axum::{Json, extract::State};
use defensesync_core::models::response::{SubmissionAck, SubmissionRequest};

use crate::{ApiState, middleware::error_handling::AppError};

/// Stores a judge's selection, replacing any earlier one
///
/// # Endpoint
///
/// ```text
/// POST /submission
/// {
///   "judgeId": "7f8a9b1c-2d3e-4f5a-6b7c-8d9e0f1a2b3c",
///   "judgeName": "...",
///   "judgeRole": "...",
///   "slotIds": ["3-6-morning", "4-6-noon"],
///   "notes": "optional"
/// }
/// ```
///
/// `availableTimes` may be sent instead of `slotIds`; each entry is mapped
/// back to its slot through its `date` and `time`.
///
/// # Errors
///
/// * `400` - No slots selected, a slot that is not offered, or an unknown judge
/// * `500` - The response could not be persisted
#[axum::debug_handler]
pub async fn submit(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<SubmissionRequest>,
) -> Result<Json<SubmissionAck>, AppError> {
    state.service.submit_request(request).await?;
    Ok(Json(SubmissionAck { success: true }))
}

//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use defensesync_core::errors::ScheduleError;
use serde_json::json;
use tracing::error;

/// Challenge sent with every 401
pub const ADMIN_REALM: &str = r#"Basic realm="Admin Area""#;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use defensesync_api::middleware::error_handling::AppError;
/// use defensesync_core::{errors::ScheduleError, models::judge::Judge, roster::Roster};
///
/// fn handler(roster: &Roster, id: &str) -> Result<Json<Judge>, AppError> {
///     let judge = roster
///         .get(id)
///         .cloned()
///         .ok_or_else(|| ScheduleError::NotFound(format!("Judge {} not found", id)))?;
///
///     Ok(Json(judge))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ScheduleError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
            ScheduleError::Validation(_) => StatusCode::BAD_REQUEST,
            ScheduleError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ScheduleError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Storage details stay in the log
        let message = match &self.0 {
            ScheduleError::Storage(err) => {
                error!("Storage failure: {:#}", err);
                "Failed to save response, please try again".to_string()
            }
            other => other.to_string(),
        };

        let mut response = (status, Json(json!({ "error": message }))).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static(ADMIN_REALM));
        }

        response
    }
}

/// Allows `?` on functions returning `Result<T, ScheduleError>` inside handlers
impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError(err)
    }
}

/// Wraps `eyre::Report` as a storage failure
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ScheduleError::Storage(err))
    }
}

/// Maps a ScheduleError to an HTTP response
pub fn map_error(err: ScheduleError) -> Response {
    AppError(err).into_response()
}

use chrono::{DateTime, Utc};
use defensesync_core::models::response::Response;
use sqlx::{FromRow, types::Json};

#[derive(Debug, Clone, FromRow)]
pub struct DbResponse {
    pub judge_id: String,
    pub payload: Json<Response>,
    pub submitted_at: DateTime<Utc>,
}

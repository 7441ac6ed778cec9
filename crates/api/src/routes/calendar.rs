use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/calendar", get(handlers::calendar::get_calendar))
        .route("/judges/:id", get(handlers::calendar::get_judge))
}

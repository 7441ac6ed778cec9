use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/response", get(handlers::response::get_response))
        // Legacy path kept for existing form clients
        .route("/api/get-response", get(handlers::response::get_response))
}

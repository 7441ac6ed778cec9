use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/submission", post(handlers::submission::submit))
        // Legacy path kept for existing form clients
        .route("/api/submit", post(handlers::submission::submit))
}

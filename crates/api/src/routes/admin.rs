use axum::{Router, middleware::from_fn_with_state, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers, middleware::auth::require_admin};

/// Admin endpoints, all behind the Basic credential gate
pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    Router::new()
        .route("/admin", get(handlers::admin::list_judges))
        .route("/admin/responses", get(handlers::admin::list_responses))
        .route_layer(from_fn_with_state(state, require_admin))
}

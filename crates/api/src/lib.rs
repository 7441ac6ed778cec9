//! # DefenseSync API
//!
//! HTTP boundary for collecting judges' availability for a defense session.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into service calls
//! - **Service**: Validates submissions and owns all writes to the store
//! - **Middleware**: Admin credential gate and error mapping
//! - **Config**: Environment configuration
//!
//! Persistence is pluggable through [`ResponseStore`]; the binary picks the
//! backend from configuration.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Submission validation and persistence
pub mod service;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use defensesync_core::{roster::Roster, store::ResponseStore};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::{middleware::auth::AdminCredentials, service::SubmissionService};

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub service: SubmissionService,
    /// `None` refuses every admin request
    pub admin: Option<AdminCredentials>,
    pub public_base_url: String,
}

impl ApiState {
    pub fn new(
        store: Arc<dyn ResponseStore>,
        roster: Roster,
        admin: Option<AdminCredentials>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            service: SubmissionService::new(store, Arc::new(roster)),
            admin,
            public_base_url: public_base_url.into(),
        }
    }
}

/// Builds the router with every endpoint attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::calendar::routes())
        .merge(routes::response::routes())
        .merge(routes::submission::routes())
        .merge(routes::admin::routes(Arc::clone(&state)))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and response store
///
/// Initializes logging, loads the roster, configures routes and serves until
/// the listener fails.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn ResponseStore>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let roster = match &config.roster_path {
        Some(path) => Roster::from_json_file(path)?,
        None => Roster::default(),
    };
    info!("Loaded roster with {} judges", roster.len());

    if config.admin.is_none() {
        warn!("ADMIN_USER/ADMIN_PASS not set; admin endpoints will refuse all requests");
    }

    let state = Arc::new(ApiState::new(
        store,
        roster,
        config.admin.clone(),
        config.public_base_url.clone(),
    ));

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect::<Vec<_>>();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

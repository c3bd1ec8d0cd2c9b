//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::jobs::JobStore;
use crate::kernel::BaseClock;
use crate::server::error::ApiError;
use crate::server::routes::{health_handler, job_routes};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobStore>,
    pub clock: Arc<dyn BaseClock>,
}

/// JSON 404 for unknown routes
async fn not_found_handler() -> ApiError {
    ApiError::RouteNotFound
}

/// CORS: any origin unless an explicit list is configured.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router
pub fn build_app(
    store: Arc<dyn JobStore>,
    clock: Arc<dyn BaseClock>,
    allowed_origins: &[String],
) -> Router {
    let app_state = AppState { store, clock };

    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Job CRUD, listing and analytics
        .merge(job_routes())
        .fallback(not_found_handler)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

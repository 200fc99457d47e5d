//! Route configuration for the dashboard.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::dashboard::handlers::{chart_data, health_check, index, list_languages};
use crate::dashboard::state::AppState;

/// Create the dashboard router: the page at the root, data endpoints
/// under `/api`.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/languages", get(list_languages))
        .route("/chart", get(chart_data));

    Router::new()
        .route("/", get(index))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

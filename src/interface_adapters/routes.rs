use crate::interface_adapters::handlers::collect_info;
use crate::interface_adapters::state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use std::sync::Arc;

// Build the HTTP router for the collect-info endpoint.
pub fn app(state: Arc<AppState>) -> Router {
    let body_limit = DefaultBodyLimit::max(state.body_limit_bytes);

    Router::new()
        .route("/collect-info", post(collect_info))
        .layer(body_limit)
        .with_state(state)
}

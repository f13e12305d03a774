pub mod query;
pub mod server;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// All HTTP routes / 路由表
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(server::home))
        .route("/api/health", get(server::health_check))
        .route("/process_query", post(query::process_query))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

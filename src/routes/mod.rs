//! Route modules for Estoque Server

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod compare;
pub mod health;
pub mod transfers;

/// Assemble the application router: health, comparison and transfer APIs,
/// and static serving of generated documents.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let downloads = ServeDir::new(state.downloads_dir());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/health", get(health::health_check))
        .nest("/api/v1/compare", compare::router())
        .nest("/api/v1/transfers", transfers::router())
        .nest_service("/downloads", downloads)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

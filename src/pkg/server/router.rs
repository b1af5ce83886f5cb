use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, post};
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::handlers::probes::{health, index, livez};
use super::state::AppState;

pub fn build_routes(state: AppState, body_limit: usize) -> Router {
    let api = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs/featured", get(handlers::jobs::featured))
        .route("/upload-profile-image", post(handlers::profile::upload))
        .route("/profile-image/{user_id}", get(handlers::profile::fetch))
        .route("/delete-profile-image", delete(handlers::profile::remove));

    Router::new()
        .nest("/api", api)
        .route("/livez", get(livez))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Route definitions.

use crate::assets;
use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/complaint", post(handlers::create_complaint))
        .route("/complaints", get(handlers::list_complaints))
        .route(
            "/complaint/{id}",
            put(handlers::complete_complaint).delete(handlers::delete_complaint),
        )
        .route("/healthz", get(handlers::healthz))
        .fallback(assets::static_asset)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

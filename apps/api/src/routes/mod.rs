pub mod cors;
pub mod health;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::profile::handlers::handle_get_user;
use crate::search::handlers::handle_search;
use crate::state::AppState;

/// Builds the full router. The CORS policy only wraps the `/api` routes.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/search/:name", get(handle_search))
        .route("/user/:username", get(handle_get_user))
        .layer(cors);

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api", api)
        .with_state(state)
}

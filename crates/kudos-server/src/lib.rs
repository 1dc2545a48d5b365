//! kudos-server
//!
//! HTTP surface: accepts letter requests, renders them to PDF under the
//! media directory and serves the results back.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use kudos_core::media::MEDIA_ROUTE;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    let media = ServeDir::new(&state.config.media_dir);

    Router::new()
        .route("/", get(routes::health::hello))
        .route("/ping", get(routes::health::ping))
        .route("/generate_letter", post(routes::letters::generate_letter))
        .nest_service(MEDIA_ROUTE, media)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}

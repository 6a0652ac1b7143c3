pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;

use axum::{
    Router,
    routing::{delete, get},
};
use states::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the full router over the given state. Tests drive this directly;
/// `main` wraps it in a TCP listener.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/blog-posts",
            get(routes::post::list_posts).post(routes::post::create_post),
        )
        .route(
            "/blog-posts/{id}",
            delete(routes::post::delete_post).put(routes::post::update_post),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

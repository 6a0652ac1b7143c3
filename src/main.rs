// ============================================================================
// BLOG POST REST API
// ============================================================================

// - CRUD over an in-memory blog post store
// - Request-shape validation with field-level diagnostics
// - CORS configuration
// - Structured logging

use blog_api::{app, states::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    // Port selection: PORT from the environment, 8080 when absent
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let app = app(AppState::new());

    // Start server
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health            - Health check");
    info!("  GET    /blog-posts        - List all posts");
    info!("  POST   /blog-posts        - Create post");
    info!("  PUT    /blog-posts/:id    - Update post");
    info!("  DELETE /blog-posts/:id    - Delete post");

    axum::serve(listener, app).await.expect("server error");
}

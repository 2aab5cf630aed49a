//! API Router configuration

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let uploads_root = state.files.root().to_path_buf();

    Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        // Auth
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        // Profiles
        .route("/update-profile", post(handlers::update_profile))
        .route("/dashboard", get(handlers::dashboard))
        .route("/admin", get(handlers::admin))
        .route("/search", get(handlers::search))
        // Guestbook
        .route("/messages", get(handlers::list_messages))
        .route("/messages", post(handlers::post_message))
        // Uploads
        .route("/upload", post(handlers::upload))
        .nest_service("/uploads", ServeDir::new(uploads_root))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Turbo stream subscriptions
        .route("/ws/streams/{stream}", get(turbo_ws::handler))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Posts
        .route(
            "/api/v1/posts",
            get(api::posts::list_posts).post(api::posts::create_post),
        )
        .route(
            "/api/v1/posts/{id}",
            get(api::posts::get_post)
                .put(api::posts::update_post)
                .delete(api::posts::delete_post),
        )
        // Comments
        .route(
            "/api/v1/posts/{id}/comments",
            get(api::comments::list_comments).post(api::comments::create_comment),
        )
        .route(
            "/api/v1/comments/{id}",
            put(api::comments::update_comment).delete(api::comments::delete_comment),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

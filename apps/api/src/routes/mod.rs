pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Student profiles
        .route("/api/profiles", post(handlers::handle_create_profile))
        .route("/api/profiles/:id", get(handlers::handle_get_profile))
        // Career analysis (POST is the idempotent ensure-exists action)
        .route(
            "/api/career-analysis",
            post(handlers::handle_ensure_analysis),
        )
        .route(
            "/api/career-analysis/:profile_id",
            get(handlers::handle_get_analysis),
        )
        // Conversations and chat
        .route(
            "/api/conversations",
            post(handlers::handle_create_conversation),
        )
        .route(
            "/api/conversations/profile/:profile_id",
            get(handlers::handle_get_conversation),
        )
        .route("/api/chat", post(handlers::handle_chat))
        .with_state(state)
}

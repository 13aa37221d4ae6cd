pub mod health;
pub mod sessions;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::chat::handlers as chat;
use crate::insights::handlers as insights;
use crate::plan::handlers as plan;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless insight engine
        .route("/api/v1/insights", post(insights::handle_insights))
        // Sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route("/api/v1/sessions/:id", get(sessions::handle_get_session))
        // Dashboard
        .route(
            "/api/v1/sessions/:id/analysis",
            post(analysis::handle_analyze)
                .get(analysis::handle_get_analysis)
                .delete(sessions::handle_reset_analysis),
        )
        // Deep Dive
        .route(
            "/api/v1/sessions/:id/deep-dive",
            get(insights::handle_deep_dive),
        )
        // Chat
        .route(
            "/api/v1/sessions/:id/chat",
            get(chat::handle_get_chat)
                .post(chat::handle_ask)
                .delete(chat::handle_new_chat),
        )
        .route(
            "/api/v1/sessions/:id/chat/resume",
            post(chat::handle_chat_resume),
        )
        // Preparation plan
        .route(
            "/api/v1/sessions/:id/plan",
            get(plan::handle_get_plan)
                .put(plan::handle_set_days)
                .post(plan::handle_generate_plan),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

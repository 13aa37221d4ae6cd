use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::session::SessionSummary;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session = state.sessions.create().await;
    info!(session_id = %session.id, "Session created");
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: session.id,
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSummary>, AppError> {
    let session = state.sessions.get(session_id).await?;
    Ok(Json(session.summary()))
}

/// DELETE /api/v1/sessions/:id/analysis
///
/// "New Analysis": clears resume, job description, results, chat and plan.
pub async fn handle_reset_analysis(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(session_id, |session| {
            session.reset();
            Ok(())
        })
        .await?;
    info!(session_id = %session_id, "Session reset for new analysis");
    Ok(StatusCode::NO_CONTENT)
}

//! Axum route handlers for Chat with Resume.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::chat::ask;
use crate::errors::AppError;
use crate::models::session::ChatTurn;
use crate::state::AppState;
use crate::upload::UploadForm;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub resume_loaded: bool,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResumeResponse {
    pub file_name: String,
    pub resume_chars: usize,
    pub history_reset: bool,
}

/// GET /api/v1/sessions/:id/chat
pub async fn handle_get_chat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ChatHistoryResponse>, AppError> {
    let session = state.sessions.get(session_id).await?;
    Ok(Json(ChatHistoryResponse {
        resume_loaded: session.resume_text.is_some(),
        history: session.chat.history,
    }))
}

/// POST /api/v1/sessions/:id/chat
pub async fn handle_ask(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let answer = ask(&state, session_id, &request.question).await?;
    let history = state.sessions.get(session_id).await?.chat.history;
    Ok(Json(ChatResponse { answer, history }))
}

/// DELETE /api/v1/sessions/:id/chat
///
/// "New Chat": forgets the conversation and the resume it was about.
pub async fn handle_new_chat(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(session_id, |session| {
            session.chat.clear();
            session.resume_text = None;
            Ok(())
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/chat/resume
///
/// A file with a new name replaces the resume and resets the conversation;
/// re-uploading the same file keeps both.
pub async fn handle_chat_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ChatResumeResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let resume = form.require_resume()?;
    resume.ensure_pdf()?;
    let file_name = resume.file_name.clone();

    let (history_reset, needs_text) = state
        .sessions
        .update(session_id, |session| {
            let reset = session.chat.last_uploaded_file.as_deref() != Some(file_name.as_str());
            if reset {
                session.resume_text = None;
                session.chat.history.clear();
                session.chat.last_uploaded_file = Some(file_name.clone());
            }
            Ok((reset, session.resume_text.is_none()))
        })
        .await?;

    let resume_chars = if needs_text {
        let text = resume.extract_text().await?;
        let chars = text.chars().count();
        state
            .sessions
            .update(session_id, |session| {
                session.resume_text = Some(text);
                Ok(())
            })
            .await?;
        info!(session_id = %session_id, file_name = %file_name, "Chat resume processed");
        chars
    } else {
        state
            .sessions
            .get(session_id)
            .await?
            .resume_text
            .map(|t| t.chars().count())
            .unwrap_or_default()
    };

    Ok(Json(ChatResumeResponse {
        file_name,
        resume_chars,
        history_reset,
    }))
}

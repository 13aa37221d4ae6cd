//! Axum route handlers for the dashboard analysis.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::evaluator::evaluate;
use crate::analysis::gauge::{match_gauges, ScoreGauge};
use crate::errors::AppError;
use crate::models::analysis::Evaluation;
use crate::state::AppState;
use crate::upload::UploadForm;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub session_id: Uuid,
    pub gauges: [ScoreGauge; 3],
    pub feedback: String,
}

impl AnalysisResponse {
    fn new(session_id: Uuid, evaluation: &Evaluation) -> Self {
        Self {
            session_id,
            gauges: match_gauges(&evaluation.analysis),
            feedback: evaluation.feedback.clone(),
        }
    }
}

/// Runs the evaluation for a session and commits the result.
///
/// The session lock is released while the LLM call is in flight, so the
/// "already analysed" check is repeated before writing.
pub async fn analyze_session(
    state: &AppState,
    session_id: Uuid,
    resume_text: String,
    jd_text: String,
) -> Result<Evaluation, AppError> {
    ensure_not_analysed(state, session_id).await?;
    let llm = state.llm()?;

    let evaluation = evaluate(&resume_text, &jd_text, llm).await?;

    info!(
        session_id = %session_id,
        overall_score = evaluation.analysis.overall_score,
        resume_chars = resume_text.len(),
        "Resume analysis completed"
    );

    state
        .sessions
        .update(session_id, |session| {
            if session.analysis_done() {
                return Err(already_analysed());
            }
            session.resume_text = Some(resume_text);
            session.jd_text = Some(jd_text);
            session.evaluation = Some(evaluation.clone());
            Ok(())
        })
        .await?;

    Ok(evaluation)
}

async fn ensure_not_analysed(state: &AppState, session_id: Uuid) -> Result<(), AppError> {
    if state.sessions.get(session_id).await?.analysis_done() {
        return Err(already_analysed());
    }
    Ok(())
}

fn already_analysed() -> AppError {
    AppError::Conflict("Analysis already done; start a new analysis first".to_string())
}

/// POST /api/v1/sessions/:id/analysis
///
/// Multipart form: `resume` (PDF file) and `jd_text`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    ensure_not_analysed(&state, session_id).await?;

    let mut form = UploadForm::read(multipart).await?;
    let resume = form.require_resume()?;
    let jd_text = form.require_jd_text()?;
    resume.ensure_pdf()?;
    state.llm()?;

    let resume_text = resume.extract_text().await?;
    let evaluation = analyze_session(&state, session_id, resume_text, jd_text).await?;

    Ok(Json(AnalysisResponse::new(session_id, &evaluation)))
}

/// GET /api/v1/sessions/:id/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let session = state.sessions.get(session_id).await?;
    let evaluation = session
        .evaluation
        .ok_or_else(|| AppError::NotFound("No analysis has been run for this session".to_string()))?;
    Ok(Json(AnalysisResponse::new(session_id, &evaluation)))
}

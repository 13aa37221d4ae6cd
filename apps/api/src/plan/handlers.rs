//! Axum route handlers for the Preparation Plan.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::plan::{generate_plan, validate_days};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GeneratePlanRequest {
    #[serde(default)]
    pub days: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct SetDaysRequest {
    pub days: u16,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub days: u16,
    pub plan: Option<String>,
}

/// GET /api/v1/sessions/:id/plan
pub async fn handle_get_plan(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = state.sessions.get(session_id).await?.plan;
    Ok(Json(PlanResponse {
        days: plan.days,
        plan: plan.text,
    }))
}

/// PUT /api/v1/sessions/:id/plan
///
/// Changing the horizon discards a plan generated for a different number of days.
pub async fn handle_set_days(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SetDaysRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let days = validate_days(request.days)?;
    let plan = state
        .sessions
        .update(session_id, |session| {
            session.plan.set_days(days);
            Ok(session.plan.clone())
        })
        .await?;
    Ok(Json(PlanResponse {
        days: plan.days,
        plan: plan.text,
    }))
}

/// POST /api/v1/sessions/:id/plan
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    body: Option<Json<GeneratePlanRequest>>,
) -> Result<Json<PlanResponse>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let (days, text) = generate_plan(&state, session_id, request.days).await?;
    Ok(Json(PlanResponse {
        days,
        plan: Some(text),
    }))
}

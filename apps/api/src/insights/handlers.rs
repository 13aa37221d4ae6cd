//! Axum route handlers for the Deep Dive report.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::insights::{InsightMetrics, InsightReport, SkillGap};
use crate::models::analysis::{AnalysisResult, Evaluation};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillsGapAnalysis {
    pub soft: SkillGap,
    pub technical: SkillGap,
}

#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub metrics: InsightMetrics,
    pub insights: Vec<String>,
    pub markdown: String,
}

impl InsightsResponse {
    fn build(analysis: &AnalysisResult) -> Self {
        let metrics = InsightMetrics::compute(analysis);
        let report = InsightReport::assemble(&metrics);
        Self {
            markdown: report.to_markdown(),
            insights: report.lines,
            metrics,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeepDiveResponse {
    pub skills_gap: SkillsGapAnalysis,
    pub recommendations: Vec<Recommendation>,
    #[serde(flatten)]
    pub insights: InsightsResponse,
}

impl DeepDiveResponse {
    pub fn build(evaluation: &Evaluation) -> Self {
        let analysis = &evaluation.analysis;
        Self {
            skills_gap: SkillsGapAnalysis {
                soft: SkillGap::compute(
                    &analysis.soft_skills_required,
                    &analysis.soft_skills_present,
                ),
                technical: SkillGap::compute(
                    &analysis.technical_skills_required,
                    &analysis.technical_skills_present,
                ),
            },
            recommendations: evaluation
                .recommendations
                .iter()
                .enumerate()
                .map(|(i, text)| Recommendation {
                    number: i + 1,
                    text: text.clone(),
                })
                .collect(),
            insights: InsightsResponse::build(analysis),
        }
    }
}

/// GET /api/v1/sessions/:id/deep-dive
pub async fn handle_deep_dive(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DeepDiveResponse>, AppError> {
    let session = state.sessions.get(session_id).await?;
    let evaluation = session.evaluation.ok_or_else(|| {
        AppError::NotFound("Please run an analysis on the Dashboard first.".to_string())
    })?;
    Ok(Json(DeepDiveResponse::build(&evaluation)))
}

/// POST /api/v1/insights
///
/// Stateless variant: coerces an untrusted analysis payload and returns its insights.
pub async fn handle_insights(Json(payload): Json<Value>) -> Result<Json<InsightsResponse>, AppError> {
    if !payload.is_object() {
        return Err(AppError::Validation(
            "Analysis payload must be a JSON object".to_string(),
        ));
    }
    let analysis = AnalysisResult::from_value(&payload);
    Ok(Json(InsightsResponse::build(&analysis)))
}

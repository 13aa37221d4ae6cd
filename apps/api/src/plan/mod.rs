// Preparation Plan: an LLM-written study schedule for the analysed resume and JD.

pub mod handlers;
pub mod prompts;

use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::{clip, fill};
use crate::llm_client::ResponseFormat;
use crate::models::session::MAX_PREP_DAYS;
use crate::plan::prompts::{PLAN_PROMPT_CHARS, PLAN_PROMPT_TEMPLATE, PLAN_SYSTEM};
use crate::state::AppState;

pub fn validate_days(days: u16) -> Result<u16, AppError> {
    if (1..=MAX_PREP_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(AppError::Validation(format!(
            "days must be between 1 and {MAX_PREP_DAYS}"
        )))
    }
}

pub fn build_prompt(resume_text: &str, jd_text: &str, days: u16) -> String {
    fill(
        PLAN_PROMPT_TEMPLATE,
        &[
            ("resume_text", clip(resume_text, PLAN_PROMPT_CHARS)),
            ("jd_text", clip(jd_text, PLAN_PROMPT_CHARS)),
            ("days", days.to_string().as_str()),
        ],
    )
}

/// Generates and stores a plan. `days` overrides the session's current horizon.
pub async fn generate_plan(
    state: &AppState,
    session_id: Uuid,
    days: Option<u16>,
) -> Result<(u16, String), AppError> {
    let days = days.map(validate_days).transpose()?;

    let session = state.sessions.get(session_id).await?;
    let (resume_text, jd_text) = match (session.resume_text, session.jd_text) {
        (Some(resume), Some(jd)) => (resume, jd),
        _ => {
            return Err(AppError::Validation(
                "Please upload resume & job description in the main page and start analysis first"
                    .to_string(),
            ))
        }
    };
    let days = days.unwrap_or(session.plan.days);
    let llm = state.llm()?;

    let prompt = build_prompt(&resume_text, &jd_text, days);
    let text = llm
        .generate(&prompt, PLAN_SYSTEM, ResponseFormat::Text)
        .await
        .map_err(|e| AppError::Llm(format!("Preparation plan failed: {e}")))?;

    state
        .sessions
        .update(session_id, |session| {
            session.plan.set_days(days);
            session.plan.text = Some(text.clone());
            Ok(())
        })
        .await?;

    info!(session_id = %session_id, days, plan_chars = text.len(), "Preparation plan generated");
    Ok((days, text))
}

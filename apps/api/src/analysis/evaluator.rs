//! Resume evaluator: one LLM call that scores a resume against a job description.

use serde_json::Value;

use crate::analysis::prompts::{
    EVALUATION_PROMPT_TEMPLATE, EVALUATION_SYSTEM, JD_PROMPT_CHARS, RESUME_PROMPT_CHARS,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{clip, fill, JSON_ONLY_SYSTEM};
use crate::llm_client::{generate_json, LanguageModel};
use crate::models::analysis::Evaluation;

pub fn build_prompt(resume_text: &str, jd_text: &str) -> String {
    fill(
        EVALUATION_PROMPT_TEMPLATE,
        &[
            ("resume_text", clip(resume_text, RESUME_PROMPT_CHARS)),
            ("jd_text", clip(jd_text, JD_PROMPT_CHARS)),
        ],
    )
}

/// Evaluates the resume and coerces the model's JSON into an `Evaluation`.
pub async fn evaluate(
    resume_text: &str,
    jd_text: &str,
    llm: &dyn LanguageModel,
) -> Result<Evaluation, AppError> {
    let prompt = build_prompt(resume_text, jd_text);
    let system = format!("{EVALUATION_SYSTEM} {JSON_ONLY_SYSTEM}");
    let raw: Value = generate_json(llm, &prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Resume evaluation failed: {e}")))?;

    if !raw.is_object() {
        return Err(AppError::Llm(
            "Resume evaluation did not return a JSON object".to_string(),
        ));
    }

    Ok(Evaluation::from_value(&raw))
}

// Chat with Resume: free-form Q&A grounded in the session's resume text.

pub mod handlers;
pub mod prompts;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::chat::prompts::{CHAT_PROMPT_TEMPLATE, CHAT_SYSTEM, OFF_TOPIC_REPLY};
use crate::errors::AppError;
use crate::llm_client::prompts::fill;
use crate::llm_client::ResponseFormat;
use crate::models::session::{ChatRole, ChatTurn};
use crate::state::AppState;

/// Renders prior turns as `Q: …` / `A: …` lines.
pub fn render_history(history: &[ChatTurn]) -> String {
    history
        .iter()
        .map(|turn| match turn.role {
            ChatRole::Question => format!("Q: {}", turn.text),
            ChatRole::Answer => format!("A: {}", turn.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(resume_text: &str, history: &[ChatTurn], question: &str) -> String {
    fill(
        CHAT_PROMPT_TEMPLATE,
        &[
            ("resume_text", resume_text),
            ("chat_history", render_history(history).as_str()),
            ("off_topic_reply", OFF_TOPIC_REPLY),
            ("question", question),
        ],
    )
}

/// Answers `question` against the session's resume and appends both turns.
pub async fn ask(state: &AppState, session_id: Uuid, question: &str) -> Result<String, AppError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let session = state.sessions.get(session_id).await?;
    let resume_text = session.resume_text.ok_or_else(|| {
        AppError::Validation("Please upload your resume to start chatting".to_string())
    })?;
    let llm = state.llm()?;

    let prompt = build_prompt(&resume_text, &session.chat.history, question);
    let answer = llm
        .generate(&prompt, CHAT_SYSTEM, ResponseFormat::Text)
        .await
        .map_err(|e| AppError::Llm(format!("Chat answer failed: {e}")))?;
    let answer = answer.trim().to_string();

    state
        .sessions
        .update(session_id, |session| {
            let now = Utc::now();
            session.chat.history.push(ChatTurn {
                role: ChatRole::Question,
                text: question.to_string(),
                at: now,
            });
            session.chat.history.push(ChatTurn {
                role: ChatRole::Answer,
                text: answer.clone(),
                at: now,
            });
            info!(
                session_id = %session_id,
                turns = session.chat.history.len(),
                "Chat answer recorded"
            );
            Ok(())
        })
        .await?;

    Ok(answer)
}

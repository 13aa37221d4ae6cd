use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::LanguageModel;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no Gemini key is configured; LLM-backed routes then answer 503.
    pub llm: Option<Arc<dyn LanguageModel>>,
    pub sessions: SessionStore,
    pub config: Config,
}

impl AppState {
    pub fn llm(&self) -> Result<&dyn LanguageModel, AppError> {
        self.llm.as_deref().ok_or(AppError::LlmUnavailable)
    }
}

//! Shared fixtures for in-crate tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::llm_client::{LanguageModel, LlmError, ResponseFormat};
use crate::sessions::SessionStore;
use crate::state::AppState;

/// Canned `LanguageModel`: pops one reply per call and records every prompt.
/// Clones share the same queue and log.
#[derive(Clone, Default)]
pub struct StubModel {
    replies: Arc<Mutex<VecDeque<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubModel {
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Arc::new(Mutex::new(replies.into_iter().map(Into::into).collect())),
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn generate(
        &self,
        prompt: &str,
        _system: &str,
        _format: ResponseFormat,
    ) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(LlmError::EmptyContent)
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).unwrap()
}

pub fn test_state(llm: Option<StubModel>) -> AppState {
    let config = test_config();
    AppState {
        llm: llm.map(|stub| Arc::new(stub) as Arc<dyn LanguageModel>),
        sessions: SessionStore::new(config.session_ttl_minutes),
        config,
    }
}

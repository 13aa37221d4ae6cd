use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::analysis::Evaluation;

pub const DEFAULT_PREP_DAYS: u16 = 10;
pub const MAX_PREP_DAYS: u16 = 365;

/// Everything one user's dashboard knows between requests.
/// Owned by the session store; handlers receive clones or mutate through the store.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub resume_text: Option<String>,
    pub jd_text: Option<String>,
    pub evaluation: Option<Evaluation>,
    pub chat: ChatState,
    pub plan: PlanState,
}

impl Session {
    pub fn new(id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            last_seen: now,
            resume_text: None,
            jd_text: None,
            evaluation: None,
            chat: ChatState::default(),
            plan: PlanState::default(),
        }
    }

    pub fn analysis_done(&self) -> bool {
        self.evaluation.is_some()
    }

    /// Clears every field except identity, as the dashboard's "New Analysis" does.
    pub fn reset(&mut self) {
        *self = Session {
            last_seen: self.last_seen,
            ..Session::new(self.id, self.created_at)
        };
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            created_at: self.created_at,
            resume_loaded: self.resume_text.is_some(),
            job_description_loaded: self.jd_text.is_some(),
            analysis_done: self.analysis_done(),
            chat_turns: self.chat.history.len(),
            last_uploaded_file: self.chat.last_uploaded_file.clone(),
            prep_days: self.plan.days,
            plan_generated: self.plan.text.is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume_loaded: bool,
    pub job_description_loaded: bool,
    pub analysis_done: bool,
    pub chat_turns: usize,
    pub last_uploaded_file: Option<String>,
    pub prep_days: u16,
    pub plan_generated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    Question,
    Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatState {
    pub history: Vec<ChatTurn>,
    pub last_uploaded_file: Option<String>,
}

impl ChatState {
    pub fn clear(&mut self) {
        self.history.clear();
        self.last_uploaded_file = None;
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanState {
    pub days: u16,
    pub text: Option<String>,
}

impl Default for PlanState {
    fn default() -> Self {
        Self {
            days: DEFAULT_PREP_DAYS,
            text: None,
        }
    }
}

impl PlanState {
    /// A plan is only valid for the horizon it was generated for.
    pub fn set_days(&mut self, days: u16) {
        if days != self.days {
            self.days = days;
            self.text = None;
        }
    }
}

// Insight Engine: deterministic post-processing of an `AnalysisResult`.
// Pure functions only; no LLM calls and no session access outside handlers.rs.

pub mod handlers;
pub mod report;
pub mod skills;

pub use report::{InsightMetrics, InsightReport};
pub use skills::SkillGap;

// Dashboard analysis: PDF resume + job description -> LLM evaluation -> score gauges.
// All LLM calls go through llm_client; the session stores the coerced Evaluation.

pub mod evaluator;
pub mod gauge;
pub mod handlers;
pub mod prompts;

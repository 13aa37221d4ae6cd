//! Analysis records coerced from the LLM's loosely-typed JSON.
//!
//! Nothing past this module sees a raw `serde_json::Value`: scores default to 0,
//! skill lists default to empty, and malformed entries are dropped.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const NO_FEEDBACK: &str = "No feedback provided";

/// Scores plus the four skill sets the insight engine consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub skill_score: f64,
    pub semantic_score: f64,
    pub soft_skills_required: BTreeSet<String>,
    pub soft_skills_present: BTreeSet<String>,
    pub technical_skills_required: BTreeSet<String>,
    pub technical_skills_present: BTreeSet<String>,
}

impl AnalysisResult {
    pub fn from_value(value: &Value) -> Self {
        Self {
            overall_score: score_field(value, "overall_score"),
            skill_score: score_field(value, "skill_score"),
            semantic_score: score_field(value, "semantic_score"),
            soft_skills_required: skill_field(value, "soft_skills_required"),
            soft_skills_present: skill_field(value, "soft_skills_present"),
            technical_skills_required: skill_field(value, "technical_skills_required"),
            technical_skills_present: skill_field(value, "technical_skills_present"),
        }
    }
}

/// Full evaluation payload stored on the session after a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub feedback: String,
    pub recommendations: Vec<String>,
}

impl Evaluation {
    pub fn from_value(value: &Value) -> Self {
        Self {
            analysis: AnalysisResult::from_value(value),
            feedback: value
                .get("feedback")
                .and_then(render_feedback)
                .unwrap_or_else(|| NO_FEEDBACK.to_string()),
            recommendations: string_list(value.get("recommendations")),
        }
    }
}

/// Rounds to two decimals from the exact binary value, halves to even.
///
/// `61.125` becomes `61.12`, where `(x * 100.0).round() / 100.0` gives `61.13`.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

fn score_field(value: &Value, key: &str) -> f64 {
    let raw = match value.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    match raw {
        Some(score) if score.is_finite() => score.clamp(0.0, 100.0),
        _ => 0.0,
    }
}

fn skill_field(value: &Value, key: &str) -> BTreeSet<String> {
    string_list(value.get(key)).into_iter().collect()
}

/// Accepts an array of strings or a single comma-separated string.
fn string_list(value: Option<&Value>) -> Vec<String> {
    let items: Vec<&str> = match value {
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).collect(),
        Some(Value::String(s)) => s.split(',').collect(),
        _ => Vec::new(),
    };
    items
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Feedback is requested as prose but models sometimes return sections as an object.
fn render_feedback(value: &Value) -> Option<String> {
    let rendered = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => bullet_lines(items),
        Value::Object(sections) => sections
            .iter()
            .map(|(heading, body)| match body {
                Value::Array(items) => format!("{heading}:\n{}", bullet_lines(items)),
                Value::String(s) => format!("{heading}:\n{}", s.trim()),
                other => format!("{heading}:\n{other}"),
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
        _ => return None,
    };
    (!rendered.is_empty()).then_some(rendered)
}

fn bullet_lines(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => format!("- {}", s.trim()),
            other => format!("- {other}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

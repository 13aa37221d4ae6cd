//! Skill matching heuristics behind the Deep Dive report.
//!
//! Matching is case-insensitive substring containment in either direction.
//! "Java" satisfies "JavaScript" and vice versa; callers rely on that.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// True if `required` is contained in any present skill, or any present skill is
/// contained in `required`, ignoring case.
pub fn matches<'a, I>(required: &str, present: I) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    let required = required.to_lowercase();
    present.into_iter().any(|p| {
        let p = p.to_lowercase();
        p.contains(&required) || required.contains(&p)
    })
}

/// Percentage of `required` satisfied by `present`; 0 when nothing is required.
pub fn coverage(required: &BTreeSet<String>, present: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 0.0;
    }
    let covered = required.iter().filter(|r| matches(r, present)).count();
    covered as f64 / required.len() as f64 * 100.0
}

/// Required skills with no present counterpart, in lexicographic order.
pub fn missing(required: &BTreeSet<String>, present: &BTreeSet<String>) -> Vec<String> {
    required
        .iter()
        .filter(|r| !matches(r, present))
        .cloned()
        .collect()
}

/// Present skills that satisfy no required skill, in lexicographic order.
pub fn extras(required: &BTreeSet<String>, present: &BTreeSet<String>) -> Vec<String> {
    present
        .iter()
        .filter(|p| !matches(p, required))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Balance {
    TechnicallyStronger,
    SoftSkillOriented,
    Balanced,
}

impl Balance {
    pub fn classify(tech_coverage: f64, soft_coverage: f64) -> Self {
        if tech_coverage > soft_coverage {
            Balance::TechnicallyStronger
        } else if soft_coverage > tech_coverage {
            Balance::SoftSkillOriented
        } else {
            Balance::Balanced
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Balance::TechnicallyStronger => "technically stronger",
            Balance::SoftSkillOriented => "soft-skill oriented",
            Balance::Balanced => "balanced",
        }
    }
}

/// Required/present/missing view of one skill category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGap {
    pub required: Vec<String>,
    pub present: Vec<String>,
    pub missing: Vec<String>,
    pub all_covered: bool,
}

impl SkillGap {
    pub fn compute(required: &BTreeSet<String>, present: &BTreeSet<String>) -> Self {
        let missing = missing(required, present);
        Self {
            required: required.iter().cloned().collect(),
            present: present.iter().cloned().collect(),
            all_covered: missing.is_empty(),
            missing,
        }
    }
}

use serde::Serialize;

use crate::insights::skills::{self, Balance};
use crate::models::analysis::{round2, AnalysisResult};

const MODERN_STACK: [&str; 4] = ["react", "node", "mongodb", "aws"];
/// Kept sorted so the missing-fundamentals line is deterministic.
const FUNDAMENTALS: [&str; 4] = ["algorithms", "data structures", "dsa", "java"];

const OVERALL_WEIGHT: f64 = 0.7;
const SKILL_WEIGHT: f64 = 0.3;

/// Soft share of all present skills, as `soft : technical` percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillRatio {
    pub soft: f64,
    pub technical: f64,
}

impl SkillRatio {
    pub fn compute(soft_present: usize, tech_present: usize) -> Option<Self> {
        let total = soft_present + tech_present;
        if total == 0 {
            return None;
        }
        let soft = soft_present as f64 / total as f64 * 100.0;
        Some(Self {
            soft,
            technical: 100.0 - soft,
        })
    }
}

/// Every derived number behind the Deep Dive insight lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightMetrics {
    pub soft_coverage: f64,
    pub technical_coverage: f64,
    pub soft_required: usize,
    pub soft_present: usize,
    pub technical_required: usize,
    pub technical_present: usize,
    pub balance: Balance,
    pub critical_gaps: Vec<String>,
    pub extra_skills: Vec<String>,
    pub ratio: Option<SkillRatio>,
    pub modern_stack: Vec<String>,
    pub missing_fundamentals: Vec<String>,
    pub suitability: f64,
}

impl InsightMetrics {
    pub fn compute(analysis: &AnalysisResult) -> Self {
        let soft_req = &analysis.soft_skills_required;
        let soft_pres = &analysis.soft_skills_present;
        let tech_req = &analysis.technical_skills_required;
        let tech_pres = &analysis.technical_skills_present;

        let soft_coverage = skills::coverage(soft_req, soft_pres);
        let technical_coverage = skills::coverage(tech_req, tech_pres);

        let mut extra_skills = skills::extras(tech_req, tech_pres);
        extra_skills.extend(skills::extras(soft_req, soft_pres));

        let modern_stack = tech_pres
            .iter()
            .filter(|p| {
                let p = p.to_lowercase();
                MODERN_STACK.iter().any(|m| p.contains(m))
            })
            .cloned()
            .collect();

        let missing_fundamentals = FUNDAMENTALS
            .iter()
            .filter(|f| !skills::matches(f, tech_pres))
            .map(|f| f.to_string())
            .collect();

        Self {
            soft_coverage,
            technical_coverage,
            soft_required: soft_req.len(),
            soft_present: soft_pres.len(),
            technical_required: tech_req.len(),
            technical_present: tech_pres.len(),
            balance: Balance::classify(technical_coverage, soft_coverage),
            critical_gaps: skills::missing(tech_req, tech_pres),
            extra_skills,
            ratio: SkillRatio::compute(soft_pres.len(), tech_pres.len()),
            modern_stack,
            missing_fundamentals,
            suitability: suitability(analysis.overall_score, analysis.skill_score),
        }
    }
}

/// 70% overall score, 30% skill score, rounded to two decimals.
pub fn suitability(overall_score: f64, skill_score: f64) -> f64 {
    round2(OVERALL_WEIGHT * overall_score + SKILL_WEIGHT * skill_score)
}

/// Prints a rounded score with at least one fractional digit: `74.0`, `74.25`.
fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Ordered, human-readable insight lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightReport {
    pub lines: Vec<String>,
}

impl InsightReport {
    pub fn assemble(m: &InsightMetrics) -> Self {
        let mut lines = vec![
            format!(
                "Soft skills coverage: **{:.1}%** ({} required, {} present)",
                m.soft_coverage, m.soft_required, m.soft_present
            ),
            format!(
                "Technical skills coverage: **{:.1}%** ({} required, {} present)",
                m.technical_coverage, m.technical_required, m.technical_present
            ),
            match m.balance {
                Balance::TechnicallyStronger => format!(
                    "Profile is **{}** compared to soft skills.",
                    m.balance.as_str()
                ),
                Balance::SoftSkillOriented => format!(
                    "Profile is **{}** compared to technical skills.",
                    m.balance.as_str()
                ),
                Balance::Balanced => "Profile shows **balanced soft and technical skills**.".to_string(),
            },
        ];

        if !m.critical_gaps.is_empty() {
            lines.push(format!(
                "⚠️ Critical technical gaps: {}",
                m.critical_gaps.join(", ")
            ));
        }
        if !m.extra_skills.is_empty() {
            lines.push(format!(
                "Candidate brings **extra skills** not in JD: {}",
                m.extra_skills.join(", ")
            ));
        }
        if let Some(ratio) = m.ratio {
            lines.push(format!(
                "Soft-to-Technical skill ratio: **{:.1}:{:.1}**",
                ratio.soft, ratio.technical
            ));
        }
        if !m.modern_stack.is_empty() {
            lines.push(format!(
                "✅ Candidate is aligned with modern tech stack trends: {}",
                m.modern_stack.join(", ")
            ));
        }
        if !m.missing_fundamentals.is_empty() {
            lines.push(format!(
                "⚠️ Missing core fundamentals: {}",
                m.missing_fundamentals.join(", ")
            ));
        }
        lines.push(format!(
            "Final Suitability Index: **{}/100**",
            format_score(m.suitability)
        ));

        Self { lines }
    }

    /// Markdown bullet list, one line per insight.
    pub fn to_markdown(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("- {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn report_for(analysis: &AnalysisResult) -> InsightReport {
        InsightReport::assemble(&InsightMetrics::compute(analysis))
    }

    fn analysis(tech_req: &[&str], tech_pres: &[&str]) -> AnalysisResult {
        AnalysisResult {
            technical_skills_required: set(tech_req),
            technical_skills_present: set(tech_pres),
            ..AnalysisResult::default()
        }
    }

    #[test]
    fn test_suitability_weighting() {
        assert_eq!(suitability(80.0, 60.0), 74.0);
        assert_eq!(suitability(0.0, 0.0), 0.0);
        assert_eq!(suitability(100.0, 100.0), 100.0);
        assert_eq!(suitability(75.0, 50.0), 67.5);
    }

    #[test]
    fn test_suitability_rounds_fractional_scores_at_the_half() {
        assert_eq!(suitability(72.5, 61.25), 69.12);
        assert_eq!(suitability(85.5, 70.25), 80.92);
        assert_eq!(format_score(suitability(72.5, 61.25)), "69.12");
    }

    #[test]
    fn test_format_score_keeps_one_decimal() {
        assert_eq!(format_score(74.0), "74.0");
        assert_eq!(format_score(67.5), "67.5");
        assert_eq!(format_score(61.13), "61.13");
    }

    #[test]
    fn test_ratio_omitted_when_nothing_present() {
        assert!(SkillRatio::compute(0, 0).is_none());
        let report = report_for(&AnalysisResult::default());
        assert!(report.lines.iter().all(|l| !l.starts_with("Soft-to-Technical")));
    }

    #[test]
    fn test_ratio_values() {
        let ratio = SkillRatio::compute(1, 3).unwrap();
        assert_eq!(ratio.soft, 25.0);
        assert_eq!(ratio.technical, 75.0);
    }

    #[test]
    fn test_full_coverage_with_extra_skill() {
        let metrics = InsightMetrics::compute(&analysis(&["Python", "SQL"], &["python", "sql", "docker"]));
        assert_eq!(metrics.technical_coverage, 100.0);
        assert!(metrics.critical_gaps.is_empty());
        assert_eq!(metrics.extra_skills, vec!["docker"]);
    }

    #[test]
    fn test_gap_with_modern_stack() {
        let metrics = InsightMetrics::compute(&analysis(&["Kubernetes"], &["AWS"]));
        assert_eq!(metrics.technical_coverage, 0.0);
        assert_eq!(metrics.critical_gaps, vec!["Kubernetes"]);
        assert_eq!(metrics.modern_stack, vec!["AWS"]);

        let report = InsightReport::assemble(&metrics);
        let modern = report
            .lines
            .iter()
            .find(|l| l.starts_with("✅ Candidate is aligned"))
            .unwrap();
        assert!(modern.contains("AWS"));
    }

    #[test]
    fn test_modern_stack_is_one_directional() {
        // "Node.js" contains "node"; "JS" does not contain any reference token.
        let metrics = InsightMetrics::compute(&analysis(&[], &["Node.js", "JS", "ReactJS"]));
        assert_eq!(metrics.modern_stack, vec!["Node.js", "ReactJS"]);
    }

    #[test]
    fn test_missing_fundamentals_use_bidirectional_match() {
        // "JavaScript" satisfies "java"; "Algorithms & Data Structures" contains both topics.
        let metrics = InsightMetrics::compute(&analysis(
            &[],
            &["JavaScript", "Algorithms & Data Structures"],
        ));
        assert_eq!(metrics.missing_fundamentals, vec!["dsa"]);

        let none_present = InsightMetrics::compute(&analysis(&[], &[]));
        assert_eq!(
            none_present.missing_fundamentals,
            vec!["algorithms", "data structures", "dsa", "java"]
        );
    }

    #[test]
    fn test_extras_list_technical_before_soft() {
        let result = AnalysisResult {
            soft_skills_required: set(&["Communication"]),
            soft_skills_present: set(&["Communication", "Mentoring"]),
            technical_skills_required: set(&["Rust"]),
            technical_skills_present: set(&["Rust", "Go"]),
            ..AnalysisResult::default()
        };
        let metrics = InsightMetrics::compute(&result);
        assert_eq!(metrics.extra_skills, vec!["Go", "Mentoring"]);
    }

    #[test]
    fn test_empty_analysis_report() {
        let report = report_for(&AnalysisResult::default());
        assert_eq!(
            report.lines,
            vec![
                "Soft skills coverage: **0.0%** (0 required, 0 present)",
                "Technical skills coverage: **0.0%** (0 required, 0 present)",
                "Profile shows **balanced soft and technical skills**.",
                "⚠️ Missing core fundamentals: algorithms, data structures, dsa, java",
                "Final Suitability Index: **0.0/100**",
            ]
        );
    }

    #[test]
    fn test_full_report_order() {
        let result = AnalysisResult {
            overall_score: 80.0,
            skill_score: 60.0,
            semantic_score: 70.0,
            soft_skills_required: set(&["Communication", "Leadership"]),
            soft_skills_present: set(&["communication"]),
            technical_skills_required: set(&["Java", "Kubernetes", "SQL"]),
            technical_skills_present: set(&["Java", "MySQL", "React", "DSA", "Algorithms", "Data Structures"]),
        };
        let report = report_for(&result);
        assert_eq!(
            report.lines,
            vec![
                "Soft skills coverage: **50.0%** (2 required, 1 present)",
                "Technical skills coverage: **66.7%** (3 required, 6 present)",
                "Profile is **technically stronger** compared to soft skills.",
                "⚠️ Critical technical gaps: Kubernetes",
                "Candidate brings **extra skills** not in JD: Algorithms, DSA, Data Structures, React",
                "Soft-to-Technical skill ratio: **14.3:85.7**",
                "✅ Candidate is aligned with modern tech stack trends: React",
                "Final Suitability Index: **74.0/100**",
            ]
        );
    }

    #[test]
    fn test_soft_skill_oriented_line() {
        let result = AnalysisResult {
            soft_skills_required: set(&["Teamwork"]),
            soft_skills_present: set(&["Teamwork"]),
            technical_skills_required: set(&["Rust"]),
            ..AnalysisResult::default()
        };
        let report = report_for(&result);
        assert_eq!(
            report.lines[2],
            "Profile is **soft-skill oriented** compared to technical skills."
        );
        assert_eq!(report.lines[3], "⚠️ Critical technical gaps: Rust");
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let result = analysis(&["Python", "Kafka"], &["python", "aws", "node"]);
        assert_eq!(report_for(&result), report_for(&result));
    }

    #[test]
    fn test_markdown_rendering() {
        let report = InsightReport {
            lines: vec!["one".to_string(), "two".to_string()],
        };
        assert_eq!(report.to_markdown(), "- one\n- two");
    }
}

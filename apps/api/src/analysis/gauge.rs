use serde::Serialize;

use crate::models::analysis::{round2, AnalysisResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeColor {
    Red,
    Orange,
    Green,
}

impl GaugeColor {
    /// ≤40 red, ≤70 orange, anything above green.
    pub fn for_score(score: f64) -> Self {
        if score <= 40.0 {
            GaugeColor::Red
        } else if score <= 70.0 {
            GaugeColor::Orange
        } else {
            GaugeColor::Green
        }
    }
}

/// One circular score gauge on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreGauge {
    pub label: &'static str,
    pub value: f64,
    pub color: GaugeColor,
}

impl ScoreGauge {
    pub fn new(label: &'static str, score: f64) -> Self {
        Self {
            label,
            value: round2(score),
            color: GaugeColor::for_score(score),
        }
    }
}

pub fn match_gauges(analysis: &AnalysisResult) -> [ScoreGauge; 3] {
    [
        ScoreGauge::new("Overall Match", analysis.overall_score),
        ScoreGauge::new("Semantic Similarity", analysis.semantic_score),
        ScoreGauge::new("Skill Match", analysis.skill_score),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_bands() {
        assert_eq!(GaugeColor::for_score(0.0), GaugeColor::Red);
        assert_eq!(GaugeColor::for_score(40.0), GaugeColor::Red);
        assert_eq!(GaugeColor::for_score(40.5), GaugeColor::Orange);
        assert_eq!(GaugeColor::for_score(70.0), GaugeColor::Orange);
        assert_eq!(GaugeColor::for_score(70.01), GaugeColor::Green);
        assert_eq!(GaugeColor::for_score(100.0), GaugeColor::Green);
    }

    #[test]
    fn test_gauge_rounds_to_two_decimals() {
        let gauge = ScoreGauge::new("Overall Match", 66.6666);
        assert_eq!(gauge.value, 66.67);
        assert_eq!(gauge.color, GaugeColor::Orange);
    }

    #[test]
    fn test_gauge_half_cent_rounds_to_even() {
        assert_eq!(ScoreGauge::new("Skill Match", 61.125).value, 61.12);
    }

    #[test]
    fn test_gauge_order() {
        let analysis = AnalysisResult {
            overall_score: 90.0,
            semantic_score: 30.0,
            skill_score: 55.0,
            ..AnalysisResult::default()
        };
        let [overall, semantic, skill] = match_gauges(&analysis);
        assert_eq!(overall.label, "Overall Match");
        assert_eq!(semantic.color, GaugeColor::Red);
        assert_eq!(skill.color, GaugeColor::Orange);
    }
}

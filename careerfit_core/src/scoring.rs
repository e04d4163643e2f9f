//! Scoring Engine
//!
//! Provides DETERMINISTIC scoring for a completed answer set.
//! No weighting is used - every dimension contributes equally.
//!
//! Per dimension: score = round(100 × sum(points) / (answered × 5))
//! Where:
//! - points: Likert agreement phrase mapped to 1..=5, any other answer
//!   (multiple choice) contributes the flat default of 3
//! - answered: questions of that dimension present in the answer set
//!
//! Overall score = round(mean of the three dimension percentages).

use crate::types::AnswerSet;
use serde::{Deserialize, Serialize};

/// Point values for the agreement scale (deterministic)
const POINTS_STRONGLY_AGREE: u32 = 5;
const POINTS_AGREE: u32 = 4;
const POINTS_NEUTRAL: u32 = 3;
const POINTS_DISAGREE: u32 = 2;
const POINTS_STRONGLY_DISAGREE: u32 = 1;
const POINTS_DEFAULT: u32 = 3;

/// Maximum points a single answer can contribute.
const POINTS_MAX: u32 = 5;

/// Maps an answer's display text to its point value.
///
/// Matching is substring-based, so the check order is load-bearing:
/// "Agree" is a substring of "Strongly Agree" and "Disagree" of
/// "Strongly Disagree". The two-word phrases are checked first; reordering
/// silently shifts scores.
pub fn answer_points(answer: &str) -> u32 {
    if answer.contains("Strongly Agree") {
        POINTS_STRONGLY_AGREE
    } else if answer.contains("Strongly Disagree") {
        POINTS_STRONGLY_DISAGREE
    } else if answer.contains("Agree") {
        POINTS_AGREE
    } else if answer.contains("Disagree") {
        POINTS_DISAGREE
    } else if answer.contains("Neutral") {
        POINTS_NEUTRAL
    } else {
        POINTS_DEFAULT
    }
}

/// Scores one dimension as a 0-100 percentage.
///
/// Selects answered entries whose question id starts with `prefix`. An
/// unanswered dimension scores 0; that is the deliberate default, not an
/// error.
pub fn dimension_score(answers: &AnswerSet, prefix: &str) -> u8 {
    let points: Vec<u32> = answers
        .iter()
        .filter(|(id, _)| id.starts_with(prefix))
        .map(|(_, answer)| answer_points(answer))
        .collect();

    if points.is_empty() {
        return 0;
    }

    let total: u32 = points.iter().sum();
    let max = points.len() as u32 * POINTS_MAX;
    ((total as f64 / max as f64) * 100.0).round() as u8
}

/// The four score percentages plus the recommendation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall: u8,
    pub psychometric: u8,
    pub technical: u8,
    pub wiscar: u8,
    pub recommendation: String,
}

/// Computes the full score report from a recorded answer set.
///
/// Total function: an empty answer set yields all-zero scores and the
/// lowest recommendation band.
pub fn compute_report(answers: &AnswerSet) -> ScoreReport {
    let psychometric = dimension_score(answers, "psych");
    let technical = dimension_score(answers, "tech");
    let wiscar = dimension_score(answers, "wiscar");

    let overall =
        ((psychometric as f64 + technical as f64 + wiscar as f64) / 3.0).round() as u8;

    ScoreReport {
        overall,
        psychometric,
        technical,
        wiscar,
        recommendation: RecommendationBand::from_score(overall).label().to_string(),
    }
}

/// Recommendation band for an overall score.
///
/// Bands have inclusive lower bounds and are evaluated highest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationBand {
    Excellent, // >= 80
    Good,      // >= 70
    Moderate,  // >= 60
    Explore,   // < 60
}

impl RecommendationBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            RecommendationBand::Excellent
        } else if score >= 70 {
            RecommendationBand::Good
        } else if score >= 60 {
            RecommendationBand::Moderate
        } else {
            RecommendationBand::Explore
        }
    }

    /// The recommendation sentence shown to the respondent.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationBand::Excellent => "Excellent fit - Highly recommended",
            RecommendationBand::Good => "Good fit - Recommended with skill development",
            RecommendationBand::Moderate => "Moderate fit - Consider with training",
            RecommendationBand::Explore => "May want to explore alternative career paths",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationBand::Excellent => "EXCELLENT",
            RecommendationBand::Good => "GOOD",
            RecommendationBand::Moderate => "MODERATE",
            RecommendationBand::Explore => "EXPLORE",
        }
    }
}

/// Formats a score report for terminal display.
pub fn format_report(report: &ScoreReport) -> String {
    let band = RecommendationBand::from_score(report.overall);

    format!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║                 CAREER READINESS REPORT                      ║
╠══════════════════════════════════════════════════════════════╣
║  Overall Score: {:3} / 100  [{:9}]
║  {}
╠══════════════════════════════════════════════════════════════╣
║  Psychometric Fit:    {:3}%
║  Technical Skills:    {:3}%
║  Career Readiness:    {:3}%
╚══════════════════════════════════════════════════════════════╝
"#,
        report.overall,
        band.as_str(),
        report.recommendation,
        report.psychometric,
        report.technical,
        report.wiscar,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers_from(pairs: &[(&str, &str)]) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for (id, answer) in pairs {
            answers.record(*id, *answer);
        }
        answers
    }

    #[test]
    fn test_answer_points_agreement_scale() {
        assert_eq!(answer_points("Strongly Agree"), 5);
        assert_eq!(answer_points("Agree"), 4);
        assert_eq!(answer_points("Neutral"), 3);
        assert_eq!(answer_points("Disagree"), 2);
        assert_eq!(answer_points("Strongly Disagree"), 1);
    }

    #[test]
    fn test_answer_points_multiple_choice_default() {
        // Any answer without an agreement phrase contributes a flat 3
        assert_eq!(answer_points("$1,440"), 3);
        assert_eq!(answer_points("Depends on urgency vs budget"), 3);
        assert_eq!(answer_points("VLOOKUP"), 3);
        assert_eq!(answer_points(""), 3);
    }

    #[test]
    fn test_unanswered_dimension_scores_zero() {
        let answers = answers_from(&[("psych_1", "Agree")]);
        assert_eq!(dimension_score(&answers, "tech"), 0);
        assert_eq!(dimension_score(&AnswerSet::new(), "psych"), 0);
    }

    #[test]
    fn test_dimension_score_extremes() {
        let all_high = answers_from(&[
            ("psych_1", "Strongly Agree"),
            ("psych_2", "Strongly Agree"),
            ("psych_3", "Strongly Agree"),
        ]);
        assert_eq!(dimension_score(&all_high, "psych"), 100);

        let all_low = answers_from(&[
            ("psych_1", "Strongly Disagree"),
            ("psych_2", "Strongly Disagree"),
        ]);
        // round(100 * 1/5) = 20
        assert_eq!(dimension_score(&all_low, "psych"), 20);
    }

    #[test]
    fn test_overall_is_unweighted_mean() {
        let answers = answers_from(&[
            // psych: 5/5 -> 100
            ("psych_1", "Strongly Agree"),
            // tech: 3/5 -> 60
            ("tech_1", "VLOOKUP"),
            // wiscar: 4/5 -> 80
            ("wiscar_1", "Agree"),
        ]);

        let report = compute_report(&answers);
        assert_eq!(report.psychometric, 100);
        assert_eq!(report.technical, 60);
        assert_eq!(report.wiscar, 80);
        assert_eq!(report.overall, 80);
    }

    #[test]
    fn test_band_boundaries_inclusive() {
        assert_eq!(
            RecommendationBand::from_score(80),
            RecommendationBand::Excellent
        );
        assert_eq!(RecommendationBand::from_score(79), RecommendationBand::Good);
        assert_eq!(RecommendationBand::from_score(70), RecommendationBand::Good);
        assert_eq!(
            RecommendationBand::from_score(69),
            RecommendationBand::Moderate
        );
        assert_eq!(
            RecommendationBand::from_score(60),
            RecommendationBand::Moderate
        );
        assert_eq!(
            RecommendationBand::from_score(59),
            RecommendationBand::Explore
        );
        assert_eq!(
            RecommendationBand::from_score(0),
            RecommendationBand::Explore
        );
    }

    #[test]
    fn test_empty_answer_set_lowest_band() {
        let report = compute_report(&AnswerSet::new());
        assert_eq!(report.overall, 0);
        assert_eq!(report.psychometric, 0);
        assert_eq!(report.technical, 0);
        assert_eq!(report.wiscar, 0);
        assert_eq!(
            report.recommendation,
            "May want to explore alternative career paths"
        );
    }

    #[test]
    fn test_full_assessment_scenario() {
        // 5 psych "Agree", 4 tech multiple choice, 5 wiscar "Neutral"
        let answers = answers_from(&[
            ("psych_1", "Agree"),
            ("psych_2", "Agree"),
            ("psych_3", "Agree"),
            ("psych_4", "Agree"),
            ("psych_5", "Agree"),
            ("tech_1", "$1,440"),
            ("tech_2", "Depends on urgency vs budget"),
            ("tech_3", "Compare at least 3 options for major purchases"),
            ("tech_4", "All of the above"),
            ("wiscar_1", "Neutral"),
            ("wiscar_2", "Neutral"),
            ("wiscar_3", "Neutral"),
            ("wiscar_4", "Neutral"),
            ("wiscar_5", "Neutral"),
        ]);

        let report = compute_report(&answers);
        assert_eq!(report.psychometric, 80);
        assert_eq!(report.technical, 60);
        assert_eq!(report.wiscar, 60);
        assert_eq!(report.overall, 67);
        assert_eq!(report.recommendation, "Moderate fit - Consider with training");
    }

    #[test]
    fn test_format_report_contains_scores() {
        let report = compute_report(&answers_from(&[("psych_1", "Strongly Agree")]));
        let text = format_report(&report);
        assert!(text.contains("CAREER READINESS REPORT"));
        assert!(text.contains("100%"));
    }
}

//! Assessment Report
//!
//! Assembles the score report and its derived lookup tables into a single
//! serializable envelope for the results view and the CLI's JSON output.
//! Built once per completed assessment; held in memory only.

use crate::recommender::{self, JobRole};
use crate::scoring::{self, RecommendationBand, ScoreReport};
use crate::types::AnswerSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub attempt_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub scores: ScoreReport,
    pub band: RecommendationBand,
    pub summary: String,
    pub job_roles: Vec<JobRole>,
    pub learning_path: Vec<String>,
}

impl AssessmentReport {
    /// Builds the full report for a completed answer set.
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let scores = scoring::compute_report(answers);
        let band = RecommendationBand::from_score(scores.overall);

        Self {
            attempt_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            band,
            summary: recommender::band_summary(band).to_string(),
            job_roles: recommender::job_roles(band),
            learning_path: recommender::learning_path(band)
                .into_iter()
                .map(String::from)
                .collect(),
            scores,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Boxed terminal rendering of the score section.
    pub fn format_text(&self) -> String {
        scoring::format_report(&self.scores)
    }
}

// Core logic for the CareerFit assessment: question catalog, answer
// tracking, scoring engine, recommendation tables, and the wizard session.

pub mod catalog;
pub mod recommender;
pub mod report;
pub mod scoring;
pub mod session;
pub mod types;

pub use report::AssessmentReport;
pub use scoring::{RecommendationBand, ScoreReport};
pub use session::{AssessmentSession, Step};
pub use types::{AnswerSet, Question, QuestionKind};

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), "0.1.0");
    }
}

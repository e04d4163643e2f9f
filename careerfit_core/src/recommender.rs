//! Career Recommender Module
//!
//! Static, band-keyed lookup tables derived from the overall score: job-role
//! suggestions and a canned learning path. No computation happens here - the
//! data is fixed and selection is purely by recommendation band.

use crate::scoring::RecommendationBand;
use serde::{Deserialize, Serialize};

/// A suggested job role with a static match percentage for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRole {
    pub title: String,
    pub match_pct: String,
    pub description: String,
}

fn role(title: &str, match_pct: &str, description: &str) -> JobRole {
    JobRole {
        title: title.to_string(),
        match_pct: match_pct.to_string(),
        description: description.to_string(),
    }
}

/// Three fixed job-role suggestions for a recommendation band.
///
/// The Moderate and Explore bands share the third list; only the two top
/// bands carry their own role sets.
pub fn job_roles(band: RecommendationBand) -> Vec<JobRole> {
    match band {
        RecommendationBand::Excellent => vec![
            role(
                "Procurement Analyst",
                "95%",
                "Perfect fit for analytical procurement work",
            ),
            role(
                "Category Manager",
                "90%",
                "Strategic sourcing and category management",
            ),
            role(
                "Vendor Risk Analyst",
                "85%",
                "Compliance and risk assessment focus",
            ),
        ],
        RecommendationBand::Good => vec![
            role(
                "Procurement Coordinator",
                "85%",
                "Entry-level procurement support role",
            ),
            role(
                "Contract Administrator",
                "80%",
                "Contract management and documentation",
            ),
            role(
                "Purchasing Assistant",
                "75%",
                "Support purchasing operations",
            ),
        ],
        RecommendationBand::Moderate | RecommendationBand::Explore => vec![
            role(
                "Operations Analyst",
                "70%",
                "Broader operational analysis role",
            ),
            role(
                "Inventory Coordinator",
                "65%",
                "Focus on inventory management",
            ),
            role(
                "Project Support Specialist",
                "60%",
                "Structured project support work",
            ),
        ],
    }
}

/// Four fixed learning-path topics for a recommendation band.
pub fn learning_path(band: RecommendationBand) -> Vec<&'static str> {
    match band {
        RecommendationBand::Excellent => vec![
            "Advanced Excel & Data Analysis",
            "Strategic Sourcing Fundamentals",
            "Contract Negotiation Skills",
            "Supply Chain Risk Management",
        ],
        RecommendationBand::Good => vec![
            "Procurement Basics & Lifecycle",
            "Excel Intermediate Skills",
            "Vendor Evaluation Methods",
            "Basic Contract Management",
        ],
        RecommendationBand::Moderate | RecommendationBand::Explore => vec![
            "Business Analysis Fundamentals",
            "Excel Beginner to Intermediate",
            "Project Management Basics",
            "Communication & Documentation Skills",
        ],
    }
}

/// One-line summary shown under the overall score.
pub fn band_summary(band: RecommendationBand) -> &'static str {
    match band {
        RecommendationBand::Excellent => {
            "Excellent! You show strong potential for a career in procurement analysis."
        }
        RecommendationBand::Good => {
            "Good foundation! With some skill development, you'd be well-suited for this field."
        }
        RecommendationBand::Moderate => {
            "Moderate potential. Consider additional training to strengthen your readiness."
        }
        RecommendationBand::Explore => {
            "You might want to explore other career paths that better match your interests and strengths."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_roles_per_band() {
        let excellent = job_roles(RecommendationBand::Excellent);
        assert_eq!(excellent.len(), 3);
        assert_eq!(excellent[0].title, "Procurement Analyst");
        assert_eq!(excellent[0].match_pct, "95%");

        let good = job_roles(RecommendationBand::Good);
        assert_eq!(good[0].title, "Procurement Coordinator");

        // Moderate and Explore share the fallback list
        assert_eq!(
            job_roles(RecommendationBand::Moderate),
            job_roles(RecommendationBand::Explore)
        );
        assert_eq!(
            job_roles(RecommendationBand::Moderate)[0].title,
            "Operations Analyst"
        );
    }

    #[test]
    fn test_learning_path_has_four_topics() {
        for band in [
            RecommendationBand::Excellent,
            RecommendationBand::Good,
            RecommendationBand::Moderate,
            RecommendationBand::Explore,
        ] {
            assert_eq!(learning_path(band).len(), 4);
        }
        assert_eq!(
            learning_path(RecommendationBand::Excellent)[0],
            "Advanced Excel & Data Analysis"
        );
    }

    #[test]
    fn test_band_summary_mentions_fit() {
        assert!(band_summary(RecommendationBand::Excellent).starts_with("Excellent"));
        assert!(band_summary(RecommendationBand::Explore).contains("other career paths"));
    }
}

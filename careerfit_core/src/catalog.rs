//! Question Catalog
//!
//! The built-in Procurement Analyst catalog plus an optional YAML loader for
//! custom catalogs. Questions are pure data: defined once, never mutated.

use crate::types::{Question, QuestionKind};
use log::debug;
use std::fs::File;
use std::io::BufReader;

/// Answer options for Likert-scale questions, in presentation order.
pub const LIKERT_OPTIONS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Dimension prefixes recognized by the scoring engine.
pub const DIMENSION_PREFIXES: [&str; 3] = ["psych", "tech", "wiscar"];

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Loads a question catalog from a YAML file and validates it.
pub fn load_catalog(path: &str) -> Result<Vec<Question>, CatalogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let catalog: Vec<Question> = serde_yaml::from_reader(reader)?;
    validate_catalog(&catalog)?;
    debug!("loaded {} questions from {}", catalog.len(), path);
    Ok(catalog)
}

/// Checks catalog invariants: non-empty, unique ids, known dimension
/// prefixes, options present on choice questions.
pub fn validate_catalog(catalog: &[Question]) -> Result<(), CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::Invalid("catalog has no questions".into()));
    }

    let mut seen = std::collections::HashSet::new();
    for question in catalog {
        if !seen.insert(question.id.as_str()) {
            return Err(CatalogError::Invalid(format!(
                "duplicate question id '{}'",
                question.id
            )));
        }

        if !DIMENSION_PREFIXES.contains(&question.dimension()) {
            return Err(CatalogError::Invalid(format!(
                "question '{}' has no known dimension prefix",
                question.id
            )));
        }

        let needs_options = matches!(
            question.kind,
            QuestionKind::MultipleChoice | QuestionKind::Ranking
        );
        let has_options = question
            .options
            .as_ref()
            .is_some_and(|opts| !opts.is_empty());
        if needs_options && !has_options {
            return Err(CatalogError::Invalid(format!(
                "choice question '{}' has no options",
                question.id
            )));
        }
    }

    Ok(())
}

fn likert(id: &str, section: &str, prompt: &str) -> Question {
    Question {
        id: id.to_string(),
        kind: QuestionKind::Likert,
        section: section.to_string(),
        prompt: prompt.to_string(),
        options: None,
        context: None,
    }
}

fn multiple_choice(id: &str, section: &str, prompt: &str, options: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        kind: QuestionKind::MultipleChoice,
        section: section.to_string(),
        prompt: prompt.to_string(),
        options: Some(options.iter().map(|o| o.to_string()).collect()),
        context: None,
    }
}

/// The built-in Procurement Analyst assessment: 14 questions across the
/// psychometric, technical, and career-readiness (WISCAR) dimensions.
pub fn builtin_catalog() -> Vec<Question> {
    const PSYCH: &str = "Psychometric Evaluation";
    const TECH: &str = "Technical & Aptitude";
    const WISCAR: &str = "Career Readiness";

    vec![
        likert(
            "psych_1",
            PSYCH,
            "I enjoy working with contracts, data, and vendor terms.",
        ),
        likert(
            "psych_2",
            PSYCH,
            "I prefer structured, detail-oriented work environments.",
        ),
        likert(
            "psych_3",
            PSYCH,
            "I see cost as a key metric in decision-making.",
        ),
        likert(
            "psych_4",
            PSYCH,
            "I feel energized when negotiating terms with vendors.",
        ),
        likert(
            "psych_5",
            PSYCH,
            "I naturally think about risk when making purchasing decisions.",
        ),
        multiple_choice(
            "tech_1",
            TECH,
            "A supplier offers a 12% discount for bulk orders. How much do you save on a $12,000 order?",
            &["$1,200", "$1,440", "$1,500", "$1,320"],
        ),
        multiple_choice(
            "tech_2",
            TECH,
            "If vendor A has faster delivery but higher cost, which should you choose for urgent orders?",
            &[
                "Always vendor A",
                "Always the cheaper option",
                "Depends on urgency vs budget",
                "Split the order",
            ],
        ),
        multiple_choice(
            "tech_3",
            TECH,
            "What does a 3-bid minimum policy imply?",
            &[
                "Must get 3 bids for any purchase",
                "Need 3 vendors in database",
                "Compare at least 3 options for major purchases",
                "All vendors must bid 3 times",
            ],
        ),
        multiple_choice(
            "tech_4",
            TECH,
            "Which Excel function is most useful for comparing vendor bids?",
            &["VLOOKUP", "SUM", "IF", "All of the above"],
        ),
        likert(
            "wiscar_1",
            WISCAR,
            "I persist through challenges even when the work becomes difficult.",
        ),
        likert(
            "wiscar_2",
            WISCAR,
            "I enjoy learning new procurement tools and systems.",
        ),
        likert(
            "wiscar_3",
            WISCAR,
            "I would find analyzing supplier performance data engaging.",
        ),
        likert(
            "wiscar_4",
            WISCAR,
            "I can see myself working in this field for several years.",
        ),
        multiple_choice(
            "wiscar_5",
            WISCAR,
            "What appeals to you most about procurement work?",
            &[
                "Cost savings opportunities",
                "Building vendor relationships",
                "Data analysis aspects",
                "Process optimization",
            ],
        ),
    ]
}

/// The answer options presented for a question: its own option list for
/// choice questions, the Likert scale otherwise.
pub fn options_for(question: &Question) -> Vec<String> {
    match &question.options {
        Some(options) => options.clone(),
        None => LIKERT_OPTIONS.iter().map(|o| o.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 14);

        let psych = catalog.iter().filter(|q| q.dimension() == "psych").count();
        let tech = catalog.iter().filter(|q| q.dimension() == "tech").count();
        let wiscar = catalog.iter().filter(|q| q.dimension() == "wiscar").count();
        assert_eq!(psych, 5);
        assert_eq!(tech, 4);
        assert_eq!(wiscar, 5);

        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_builtin_catalog_options() {
        let catalog = builtin_catalog();

        // Every multiple-choice question carries its own options
        for question in &catalog {
            match question.kind {
                QuestionKind::MultipleChoice => {
                    assert_eq!(question.options.as_ref().map(Vec::len), Some(4));
                }
                _ => assert!(question.options.is_none()),
            }
        }

        // Likert questions fall back to the shared scale
        let first = &catalog[0];
        assert_eq!(options_for(first), LIKERT_OPTIONS.to_vec());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = builtin_catalog();
        catalog.push(catalog[0].clone());

        let err = validate_catalog(&catalog).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_rejects_unknown_prefix() {
        let catalog = vec![likert("mystery_1", "Mystery", "Why?")];

        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("dimension prefix"));
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let err = validate_catalog(&[]).unwrap_err();
        assert!(err.to_string().contains("no questions"));
    }

    #[test]
    fn test_load_catalog_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
- id: psych_1
  kind: likert
  section: Psychometric Evaluation
  prompt: I enjoy working with contracts, data, and vendor terms.
- id: tech_1
  kind: multiple-choice
  section: Technical & Aptitude
  prompt: Pick one.
  options:
    - "Option A"
    - "Option B"
"#
        )
        .unwrap();

        let catalog = load_catalog(file.path().to_str().unwrap()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].kind, QuestionKind::Likert);
        assert_eq!(catalog[1].kind, QuestionKind::MultipleChoice);
        assert_eq!(catalog[1].options.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog("/nonexistent/catalog.yaml").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}

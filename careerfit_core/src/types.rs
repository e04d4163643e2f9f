use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a question is presented and answered.
///
/// Only `Likert` and `MultipleChoice` appear in the built-in catalog;
/// `Numerical` and `Ranking` are accepted by the catalog loader for forward
/// compatibility but are rendered as plain choice lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Likert,
    MultipleChoice,
    Numerical,
    Ranking,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    /// Unique id carrying the dimension prefix (`psych_`, `tech_`, `wiscar_`).
    pub id: String,
    pub kind: QuestionKind,
    /// Display grouping shown above the question. Not used in scoring.
    pub section: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Question {
    /// The dimension prefix of this question's id (`psych`, `tech`, ...).
    pub fn dimension(&self) -> &str {
        self.id.split('_').next().unwrap_or(&self.id)
    }
}

/// The respondent's selected answers, keyed by question id.
///
/// The value is the exact display text of the chosen option. A key is
/// present iff that question has been answered at least once; re-answering
/// overwrites. Answers live only for the current session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: HashMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
        }
    }

    pub fn record(&mut self, question_id: impl Into<String>, answer: impl Into<String>) {
        self.answers.insert(question_id.into(), answer.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_set_record_and_overwrite() {
        let mut answers = AnswerSet::new();
        assert!(answers.is_empty());
        assert!(!answers.is_answered("psych_1"));

        answers.record("psych_1", "Agree");
        assert!(answers.is_answered("psych_1"));
        assert_eq!(answers.get("psych_1"), Some("Agree"));
        assert_eq!(answers.len(), 1);

        // Re-answering overwrites, the key count stays the same
        answers.record("psych_1", "Strongly Agree");
        assert_eq!(answers.get("psych_1"), Some("Strongly Agree"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn test_answer_set_clear() {
        let mut answers = AnswerSet::new();
        answers.record("psych_1", "Agree");
        answers.record("tech_1", "$1,440");

        answers.clear();
        assert!(answers.is_empty());
        assert!(!answers.is_answered("psych_1"));
    }

    #[test]
    fn test_question_dimension() {
        let question = Question {
            id: "wiscar_3".to_string(),
            kind: QuestionKind::Likert,
            section: "Career Readiness".to_string(),
            prompt: "I would find analyzing supplier performance data engaging.".to_string(),
            options: None,
            context: None,
        };
        assert_eq!(question.dimension(), "wiscar");
    }
}

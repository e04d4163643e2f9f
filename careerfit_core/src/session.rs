//! Assessment Session
//!
//! Linear wizard state over a question catalog: one current question, an
//! answer set that grows as the respondent advances, previous/next
//! navigation, and a retake reset. Single-threaded and exclusively owned by
//! its caller; nothing here suspends or blocks.

use crate::catalog;
use crate::types::{AnswerSet, Question};
use log::debug;

/// Result of an advance attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the next question.
    Next,
    /// The final question was answered; the assessment is complete.
    Complete,
    /// The current question has no recorded answer; position unchanged.
    Unanswered,
}

pub struct AssessmentSession {
    catalog: Vec<Question>,
    answers: AnswerSet,
    current: usize,
}

impl AssessmentSession {
    pub fn new(catalog: Vec<Question>) -> Self {
        Self {
            catalog,
            answers: AnswerSet::new(),
            current: 0,
        }
    }

    /// Session over the built-in Procurement Analyst catalog.
    pub fn with_builtin() -> Self {
        Self::new(catalog::builtin_catalog())
    }

    pub fn catalog(&self) -> &[Question] {
        &self.catalog
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.catalog[self.current]
    }

    /// The recorded answer for the current question, if any.
    pub fn current_answer(&self) -> Option<&str> {
        self.answers.get(&self.current_question().id)
    }

    /// 1-based position and total, for "n of N" display.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.catalog.len())
    }

    pub fn percent_complete(&self) -> u16 {
        (((self.current + 1) * 100) / self.catalog.len().max(1)) as u16
    }

    /// Records (or overwrites) the answer for the current question.
    pub fn record_answer(&mut self, answer: impl Into<String>) {
        let id = self.current_question().id.clone();
        self.answers.record(id, answer);
    }

    /// Whether "next" is allowed: the current question must be answered.
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Advances past the current question.
    ///
    /// Refuses while the current question is unanswered; reports
    /// `Step::Complete` when the final question is answered (the caller
    /// computes the score report exactly once at that point).
    pub fn advance(&mut self) -> Step {
        if !self.can_advance() {
            return Step::Unanswered;
        }
        if self.current + 1 < self.catalog.len() {
            self.current += 1;
            debug!("advanced to question {}", self.current_question().id);
            Step::Next
        } else {
            debug!("assessment complete, {} answers recorded", self.answers.len());
            Step::Complete
        }
    }

    /// Moves back one question, saturating at the first.
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Retake: clears every answer and returns to the first question.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.current = 0;
        debug!("session restarted");
    }

    /// Whether every catalog question has a recorded answer.
    pub fn is_complete(&self) -> bool {
        self.catalog.iter().all(|q| self.answers.is_answered(&q.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionKind;

    fn create_test_catalog() -> Vec<Question> {
        ["psych_1", "tech_1", "wiscar_1"]
            .iter()
            .map(|id| Question {
                id: id.to_string(),
                kind: QuestionKind::Likert,
                section: "Test".to_string(),
                prompt: format!("Prompt for {}", id),
                options: None,
                context: None,
            })
            .collect()
    }

    #[test]
    fn test_advance_blocked_until_answered() {
        let mut session = AssessmentSession::new(create_test_catalog());
        assert!(!session.can_advance());
        assert_eq!(session.advance(), Step::Unanswered);
        assert_eq!(session.current_index(), 0);

        session.record_answer("Agree");
        assert!(session.can_advance());
        assert_eq!(session.advance(), Step::Next);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_complete_on_final_question() {
        let mut session = AssessmentSession::new(create_test_catalog());
        session.record_answer("Agree");
        session.advance();
        session.record_answer("Neutral");
        session.advance();
        session.record_answer("Strongly Agree");

        assert_eq!(session.advance(), Step::Complete);
        // Position stays on the final question after completion
        assert_eq!(session.current_index(), 2);
        assert!(session.is_complete());
    }

    #[test]
    fn test_previous_saturates_at_first() {
        let mut session = AssessmentSession::new(create_test_catalog());
        session.previous();
        assert_eq!(session.current_index(), 0);

        session.record_answer("Agree");
        session.advance();
        session.previous();
        assert_eq!(session.current_index(), 0);
        // The earlier answer is still there when revisiting
        assert_eq!(session.current_answer(), Some("Agree"));
    }

    #[test]
    fn test_restart_clears_answers() {
        let mut session = AssessmentSession::new(create_test_catalog());
        session.record_answer("Agree");
        session.advance();
        session.record_answer("Disagree");

        session.restart();
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert!(!session.can_advance());
    }

    #[test]
    fn test_progress_reporting() {
        let mut session = AssessmentSession::new(create_test_catalog());
        assert_eq!(session.progress(), (1, 3));
        assert_eq!(session.percent_complete(), 33);

        session.record_answer("Agree");
        session.advance();
        assert_eq!(session.progress(), (2, 3));

        session.record_answer("Agree");
        session.advance();
        assert_eq!(session.progress(), (3, 3));
        assert_eq!(session.percent_complete(), 100);
    }

    #[test]
    fn test_builtin_session() {
        let session = AssessmentSession::with_builtin();
        assert_eq!(session.catalog().len(), 14);
        assert_eq!(session.current_question().id, "psych_1");
    }
}

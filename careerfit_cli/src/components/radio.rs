/// Single-choice option list for one question
#[derive(Debug, Clone)]
pub struct RadioState {
    pub options: Vec<String>,
    /// Cursor position within the option list.
    pub cursor: usize,
    /// Index of the committed choice, if any.
    pub chosen: Option<usize>,
}

impl RadioState {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            cursor: 0,
            chosen: None,
        }
    }

    /// Rebuilds the list for a new question, restoring a previously
    /// recorded answer so revisits show the earlier selection.
    pub fn reset(&mut self, options: Vec<String>, recorded: Option<&str>) {
        self.chosen = recorded.and_then(|answer| options.iter().position(|o| o == answer));
        self.cursor = self.chosen.unwrap_or(0);
        self.options = options;
    }

    pub fn move_down(&mut self) {
        if !self.options.is_empty() && self.cursor < self.options.len() - 1 {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Commits the option under the cursor and returns its text.
    pub fn choose(&mut self) -> Option<&str> {
        if self.options.is_empty() {
            return None;
        }
        self.chosen = Some(self.cursor);
        Some(&self.options[self.cursor])
    }

    pub fn is_chosen(&self, index: usize) -> bool {
        self.chosen == Some(index)
    }

    pub fn chosen_text(&self) -> Option<&str> {
        self.chosen.map(|i| self.options[i].as_str())
    }
}

impl Default for RadioState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likert_options() -> Vec<String> {
        ["Strongly Disagree", "Disagree", "Neutral", "Agree", "Strongly Agree"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_new_radio_has_no_choice() {
        let state = RadioState::new(likert_options());
        assert_eq!(state.cursor, 0);
        assert!(state.chosen.is_none());
        assert!(state.chosen_text().is_none());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = RadioState::new(likert_options());

        state.move_up();
        assert_eq!(state.cursor, 0);

        for _ in 0..10 {
            state.move_down();
        }
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn test_choose_commits_cursor() {
        let mut state = RadioState::new(likert_options());
        state.move_down();
        state.move_down();

        assert_eq!(state.choose(), Some("Neutral"));
        assert!(state.is_chosen(2));
        assert_eq!(state.chosen_text(), Some("Neutral"));

        // Choosing again elsewhere replaces the selection
        state.move_down();
        assert_eq!(state.choose(), Some("Agree"));
        assert!(!state.is_chosen(2));
        assert!(state.is_chosen(3));
    }

    #[test]
    fn test_reset_restores_recorded_answer() {
        let mut state = RadioState::new(Vec::new());
        state.reset(likert_options(), Some("Agree"));

        assert_eq!(state.cursor, 3);
        assert!(state.is_chosen(3));

        // Unknown recorded text leaves the list unselected
        state.reset(likert_options(), Some("Not An Option"));
        assert!(state.chosen.is_none());
        assert_eq!(state.cursor, 0);

        state.reset(likert_options(), None);
        assert!(state.chosen.is_none());
    }

    #[test]
    fn test_choose_on_empty_list() {
        let mut state = RadioState::new(Vec::new());
        assert_eq!(state.choose(), None);
    }
}

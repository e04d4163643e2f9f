/// Centralized keybindings and help text for the CareerFit TUI

use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
            ("Space/Enter", "Select answer"),
            ("n/→", "Next question"),
            ("p/←", "Previous question"),
            ("r", "Retake assessment"),
            ("d", "Download report"),
            ("t", "Toggle high-contrast"),
            ("?", "Show help"),
            ("q/Esc", "Quit/Close"),
        ]
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q') | KeyCode::Esc)
            || (matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Check if key is help
    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    /// Check if key is down
    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down)
    }

    /// Check if key is up
    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up)
    }

    /// Check if key is select (Space/Enter)
    pub fn is_select(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char(' ') | KeyCode::Enter)
    }

    /// Check if key is next question
    pub fn is_next(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('n') | KeyCode::Right)
    }

    /// Check if key is previous question
    pub fn is_previous(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('p') | KeyCode::Left)
    }

    /// Check if key is retake
    pub fn is_retake(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('r'))
    }

    /// Check if key is download report
    pub fn is_download(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('d'))
    }

    /// Check if key is toggle theme
    pub fn is_toggle_theme(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('t'))
    }

    /// Check if key is start (Enter on the welcome screen)
    pub fn is_start(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter | KeyCode::Char('s'))
    }
}

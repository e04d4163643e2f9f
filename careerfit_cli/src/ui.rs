use crate::components::RadioState;
/// Top-level TUI event loop and input handler
use crate::keymap::KeyMap;
use crate::screens::{AssessmentScreen, ResultsScreen, WelcomeScreen};
use anyhow::Result;
use careerfit_core::{catalog, AssessmentReport, AssessmentSession, Step};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Assessment,
    Results,
    Help,
}

#[derive(Debug, Clone)]
struct Notice {
    title: String,
    message: String,
}

impl Notice {
    fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct AppState {
    screen: Screen,
    session: AssessmentSession,
    radio: RadioState,
    report: Option<AssessmentReport>,
    notice: Option<Notice>,
    help_previous_screen: Option<Screen>,
    high_contrast: bool,
    should_quit: bool,
}

impl AppState {
    pub fn new(catalog_path: Option<&str>) -> Result<Self> {
        let questions = match catalog_path {
            Some(path) => catalog::load_catalog(path)?,
            None => catalog::builtin_catalog(),
        };

        Ok(Self {
            screen: Screen::Welcome,
            session: AssessmentSession::new(questions),
            radio: RadioState::default(),
            report: None,
            notice: None,
            help_previous_screen: None,
            high_contrast: false,
            should_quit: false,
        })
    }

    /// Rebuilds the option list for the session's current question,
    /// restoring any previously recorded answer.
    fn sync_radio(&mut self) {
        let options = catalog::options_for(self.session.current_question());
        let recorded = self.session.current_answer().map(str::to_string);
        self.radio.reset(options, recorded.as_deref());
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: crossterm::event::KeyModifiers) {
        // An open notice swallows the next key
        if self.notice.is_some() {
            self.notice = None;
            return;
        }

        if KeyMap::is_help(code) {
            if self.screen == Screen::Help {
                self.screen = self.help_previous_screen.take().unwrap_or(Screen::Welcome);
            } else {
                self.help_previous_screen = Some(self.screen);
                self.screen = Screen::Help;
            }
            return;
        }

        if KeyMap::is_toggle_theme(code) {
            self.high_contrast = !self.high_contrast;
            return;
        }

        if KeyMap::is_quit(code, modifiers) {
            match self.screen {
                Screen::Welcome => self.should_quit = true,
                Screen::Help => {
                    self.screen = self.help_previous_screen.take().unwrap_or(Screen::Welcome)
                }
                _ => self.screen = Screen::Welcome,
            }
            return;
        }

        match self.screen {
            Screen::Welcome => self.handle_welcome_key(code),
            Screen::Assessment => self.handle_assessment_key(code),
            Screen::Results => self.handle_results_key(code),
            Screen::Help => {
                // Any key closes help
                if matches!(code, KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc) {
                    self.screen = self.help_previous_screen.take().unwrap_or(Screen::Welcome);
                }
            }
        }
    }

    fn handle_welcome_key(&mut self, code: KeyCode) {
        if KeyMap::is_start(code) {
            self.sync_radio();
            self.screen = Screen::Assessment;
        }
    }

    fn handle_assessment_key(&mut self, code: KeyCode) {
        if KeyMap::is_down(code) {
            self.radio.move_down();
        } else if KeyMap::is_up(code) {
            self.radio.move_up();
        } else if KeyMap::is_select(code) {
            if let Some(answer) = self.radio.choose().map(str::to_string) {
                self.session.record_answer(answer);
            }
        } else if KeyMap::is_next(code) {
            // Inert while the current question is unanswered
            match self.session.advance() {
                Step::Next => self.sync_radio(),
                Step::Complete => {
                    // Computed exactly once, on the final navigation action
                    self.report = Some(AssessmentReport::from_answers(self.session.answers()));
                    self.screen = Screen::Results;
                }
                Step::Unanswered => {}
            }
        } else if KeyMap::is_previous(code) {
            self.session.previous();
            self.sync_radio();
        }
    }

    fn handle_results_key(&mut self, code: KeyCode) {
        if KeyMap::is_retake(code) {
            self.session.restart();
            self.report = None;
            self.sync_radio();
            self.screen = Screen::Assessment;
        } else if KeyMap::is_download(code) {
            self.notice = Some(Notice::new(
                "Download Report",
                "Report download is not yet implemented.\n\nPress any key to continue.",
            ));
        }
    }
}

pub fn run_tui(catalog_path: Option<&str>) -> Result<()> {
    let mut app = AppState::new(catalog_path)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    while !app.should_quit {
        // A results view without a computed report redirects to the
        // entry screen instead of failing
        if app.screen == Screen::Results && app.report.is_none() {
            app.screen = Screen::Welcome;
        }

        terminal.draw(|f| {
            let size = f.area();

            match app.screen {
                Screen::Welcome => {
                    f.render_widget(WelcomeScreen::new(app.high_contrast), size);
                }
                Screen::Assessment => {
                    let screen =
                        AssessmentScreen::new(&app.session, &app.radio, app.high_contrast);
                    f.render_widget(screen, size);
                }
                Screen::Results => {
                    if let Some(ref report) = app.report {
                        f.render_widget(ResultsScreen::new(report, app.high_contrast), size);
                    }
                }
                Screen::Help => {
                    render_help(f, size, app.high_contrast);
                }
            }

            if let Some(ref notice) = app.notice {
                render_modal(f, size, &notice.title, &notice.message, app.high_contrast);
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key.code, key.modifiers);
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn render_help(f: &mut ratatui::Frame, area: Rect, high_contrast: bool) {
    let accent = if high_contrast {
        Color::White
    } else {
        Color::Rgb(45, 212, 191)
    };

    let border_style = if high_contrast {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            " Help - Keybindings ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let help_items = KeyMap::help_text();
    let mut lines = vec![
        Line::from(Span::styled(
            "CareerFit Assessment",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, desc) in help_items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    f.render_widget(paragraph, inner);
}

fn render_modal(
    f: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    message: &str,
    high_contrast: bool,
) {
    let accent = if high_contrast {
        Color::White
    } else {
        Color::Rgb(45, 212, 191)
    };

    // Center the modal
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);

    let modal_area = horizontal[1];

    // Clear the area
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let text = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);
    f.render_widget(text, inner);
}

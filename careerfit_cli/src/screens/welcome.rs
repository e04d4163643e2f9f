/// Welcome screen - assessment introduction and start prompt
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct WelcomeScreen {
    high_contrast: bool,
}

impl WelcomeScreen {
    pub fn new(high_contrast: bool) -> Self {
        Self { high_contrast }
    }

    fn accent(&self) -> Color {
        if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(45, 212, 191)
        }
    }

    fn border_style(&self) -> Style {
        if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Widget for WelcomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        self.render_hero(chunks[0], buf);
        self.render_dimensions(chunks[1], buf);
        self.render_footer(chunks[2], buf);
    }
}

impl WelcomeScreen {
    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let accent = self.accent();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                " CareerFit Assessment ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let text = vec![
            Line::from(Span::styled(
                "Should I Become a Procurement Analyst?",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(
                "Discover if a career in procurement analysis is right for you. \
                 Get personalized insights based on your personality, skills, and career goals.",
            ),
            Line::from(""),
            Line::from(Span::styled(
                "14 questions  ·  ~20 minutes  ·  No registration  ·  Instant results",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }

    fn render_dimensions(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        self.render_dimension_card(
            chunks[0],
            buf,
            "Psychometric Fit",
            "Assess your personality traits, work preferences, and natural inclinations for procurement work.",
            &["Personality alignment", "Work style preferences", "Motivation assessment"],
        );
        self.render_dimension_card(
            chunks[1],
            buf,
            "Technical Readiness",
            "Evaluate your analytical abilities, numerical skills, and procurement domain knowledge.",
            &["Numerical reasoning", "Logical thinking", "Domain awareness"],
        );
        self.render_dimension_card(
            chunks[2],
            buf,
            "Career Guidance",
            "Get personalized recommendations for career paths and skill development opportunities.",
            &["Job role matches", "Learning pathway", "Skill gap analysis"],
        );
    }

    fn render_dimension_card(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        blurb: &str,
        bullets: &[&str],
    ) {
        let accent = self.accent();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut lines = vec![Line::from(blurb), Line::from("")];
        for bullet in bullets {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::raw(*bullet),
            ]));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let text = vec![Line::from(vec![
            Span::styled("[Enter] ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Start Assessment  "),
            Span::styled("[?] ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Help  "),
            Span::styled("[q] ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Quit"),
        ])];

        let paragraph = Paragraph::new(text).alignment(Alignment::Center);
        Widget::render(paragraph, area, buf);
    }
}

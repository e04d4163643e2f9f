/// Results screen - score summary, role matches, and learning path
use crate::components::{score_color, ScoreBar};
use careerfit_core::AssessmentReport;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ResultsScreen<'a> {
    report: &'a AssessmentReport,
    high_contrast: bool,
}

impl<'a> ResultsScreen<'a> {
    pub fn new(report: &'a AssessmentReport, high_contrast: bool) -> Self {
        Self {
            report,
            high_contrast,
        }
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

impl<'a> Widget for ResultsScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(2),
            ])
            .split(area);

        self.render_overall(chunks[0], buf);
        self.render_dimension_bars(chunks[1], buf);
        self.render_guidance(chunks[2], buf);
        self.render_footer(chunks[3], buf);
    }
}

impl<'a> ResultsScreen<'a> {
    fn render_overall(&self, area: Rect, buf: &mut Buffer) {
        let accent = self.accent();
        let scores = &self.report.scores;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                " Your Assessment Results ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let badge_color = score_color(scores.overall, self.high_contrast);
        let text = vec![
            Line::from(vec![
                Span::raw("Overall Readiness Score: "),
                Span::styled(
                    format!("{}", scores.overall),
                    Style::default()
                        .fg(badge_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" / 100   "),
                Span::styled(
                    format!("[{}]", scores.recommendation),
                    Style::default().fg(badge_color),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                self.report.summary.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        Widget::render(paragraph, inner, buf);
    }

    fn render_dimension_bars(&self, area: Rect, buf: &mut Buffer) {
        let scores = &self.report.scores;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(area);

        let bars = [
            ("Psychometric Fit", scores.psychometric, "Personality traits and work preferences"),
            ("Technical Skills", scores.technical, "Analytical abilities and domain knowledge"),
            ("Career Readiness", scores.wiscar, "Motivation and learning orientation"),
        ];

        for (chunk, (label, score, caption)) in chunks.iter().zip(bars) {
            let bar = ScoreBar::new(label, score)
                .caption(caption)
                .high_contrast(self.high_contrast);
            Widget::render(bar, *chunk, buf);
        }
    }

    fn render_guidance(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.render_job_roles(chunks[0], buf);
        self.render_learning_path(chunks[1], buf);
    }

    fn render_job_roles(&self, area: Rect, buf: &mut Buffer) {
        let accent = self.accent();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                " Recommended Career Paths ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut lines = Vec::new();
        for role in &self.report.job_roles {
            lines.push(Line::from(vec![
                Span::styled(
                    role.title.clone(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", role.match_pct),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
            lines.push(Line::from(Span::raw(format!("  {}", role.description))));
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        Widget::render(paragraph, inner, buf);
    }

    fn render_learning_path(&self, area: Rect, buf: &mut Buffer) {
        let accent = self.accent();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                " Your Learning Path ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let lines: Vec<Line> = self
            .report
            .learning_path
            .iter()
            .enumerate()
            .map(|(index, topic)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {}. ", index + 1),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(topic.clone()),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        Widget::render(paragraph, inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let text = vec![Line::from(vec![
            Span::styled("[d] ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Download Report  "),
            Span::styled("[r] ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Retake Assessment  "),
            Span::styled("[q] ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Back to Home"),
        ])];

        let paragraph = Paragraph::new(text).alignment(Alignment::Center);
        Widget::render(paragraph, area, buf);
    }
}

/// Assessment screen - one question at a time with a single-choice list
use crate::components::RadioState;
use careerfit_core::AssessmentSession;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

pub struct AssessmentScreen<'a> {
    session: &'a AssessmentSession,
    radio: &'a RadioState,
    high_contrast: bool,
}

impl<'a> AssessmentScreen<'a> {
    pub fn new(session: &'a AssessmentSession, radio: &'a RadioState, high_contrast: bool) -> Self {
        Self {
            session,
            radio,
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

impl<'a> Widget for AssessmentScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        self.render_progress(chunks[0], buf);
        self.render_question(chunks[1], buf);
        self.render_footer(chunks[2], buf);
    }
}

impl<'a> AssessmentScreen<'a> {
    fn render_progress(&self, area: Rect, buf: &mut Buffer) {
        let accent = self.accent();
        let (position, total) = self.session.progress();
        let section = &self.session.current_question().section;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(Span::styled(
                " Procurement Analyst Assessment ",
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let header = Line::from(vec![
            Span::styled(section.as_str(), Style::default().fg(accent)),
            Span::raw("  "),
            Span::styled(
                format!("{} of {}", position, total),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        Widget::render(
            Paragraph::new(header),
            Rect::new(inner.x, inner.y, inner.width, 1),
            buf,
        );

        if inner.height > 1 {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(accent))
                .percent(self.session.percent_complete())
                .label("");
            Widget::render(gauge, Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
        }
    }

    fn render_question(&self, area: Rect, buf: &mut Buffer) {
        let accent = self.accent();
        let question = self.session.current_question();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style());

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                question.prompt.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(context) = &question.context {
            lines.push(Line::from(Span::styled(
                context.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
        lines.push(Line::from(""));

        for (index, option) in self.radio.options.iter().enumerate() {
            let marker = if self.radio.is_chosen(index) {
                "(•)"
            } else {
                "( )"
            };

            let style = if index == self.radio.cursor {
                Style::default()
                    .fg(accent)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else if self.radio.is_chosen(index) {
                Style::default().fg(accent)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", marker), style),
                Span::styled(option.clone(), style),
            ]));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        Widget::render(paragraph, inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let (position, total) = self.session.progress();
        let on_last = position == total;

        let next_label = if on_last {
            "Complete Assessment"
        } else {
            "Next"
        };
        let next_style = if self.session.can_advance() {
            Style::default().fg(self.accent())
        } else {
            // Inert while the current question is unanswered
            Style::default().add_modifier(Modifier::DIM)
        };

        let text = vec![Line::from(vec![
            Span::styled("[p/←] ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Previous  "),
            Span::styled("[Space] ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Select  "),
            Span::styled("[n/→] ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(next_label, next_style),
            Span::raw("  "),
            Span::styled("[q] ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("Quit"),
        ])];

        let paragraph = Paragraph::new(text).alignment(Alignment::Center);
        Widget::render(paragraph, area, buf);
    }
}

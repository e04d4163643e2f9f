/// Labeled percentage bar for dimension scores

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Widget},
};

/// Color for a score, matching the results page bands:
/// >= 80 green, >= 70 orange, below red.
pub fn score_color(score: u8, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    if score >= 80 {
        Color::Green
    } else if score >= 70 {
        Color::Rgb(251, 146, 60) // Orange
    } else {
        Color::Red
    }
}

pub struct ScoreBar<'a> {
    label: &'a str,
    caption: &'a str,
    score: u8,
    high_contrast: bool,
}

impl<'a> ScoreBar<'a> {
    pub fn new(label: &'a str, score: u8) -> Self {
        Self {
            label,
            caption: "",
            score,
            high_contrast: false,
        }
    }

    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = caption;
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }
}

impl<'a> Widget for ScoreBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = if self.high_contrast {
            Color::White
        } else {
            Color::Rgb(45, 212, 191)
        };

        let border_style = if self.high_contrast {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        if inner.height == 0 {
            return;
        }

        let gauge_area = Rect::new(inner.x, inner.y, inner.width, 1);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(score_color(self.score, self.high_contrast)))
            .percent(self.score.min(100) as u16)
            .label(format!("{}%", self.score));
        Widget::render(gauge, gauge_area, buf);

        if inner.height > 1 && !self.caption.is_empty() {
            let caption_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
            let caption = ratatui::widgets::Paragraph::new(Span::styled(
                self.caption,
                Style::default().add_modifier(Modifier::DIM),
            ));
            Widget::render(caption, caption_area, buf);
        }
    }
}

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::ThemePalette;
use crate::transcript::TranscriptView;

/// Hint bar under the transcript
pub struct Footer<'a> {
    view: &'a TranscriptView,
    theme: ThemePalette,
}

impl<'a> Footer<'a> {
    pub fn new(view: &'a TranscriptView, theme: ThemePalette) -> Self {
        Self { view, theme }
    }

    /// Render the key hints to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let key = Style::default().fg(self.theme.blue);
        let label = Style::default().fg(self.theme.muted);

        let mut spans = vec![
            Span::styled("↑/↓", key),
            Span::styled(" scroll  ", label),
            Span::styled("End", key),
            Span::styled(" newest  ", label),
            Span::styled("Tab", key),
            Span::styled(" focus  ", label),
            Span::styled("Enter", key),
            Span::styled(" expand  ", label),
            Span::styled("c", key),
            Span::styled(" copy  ", label),
        ];
        if self.view.regenerate_candidate().is_some() {
            spans.push(Span::styled("r", key));
            spans.push(Span::styled(" regenerate  ", label));
        }
        spans.push(Span::styled("q", key));
        spans.push(Span::styled(" quit", label));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(self.theme.panel_bg)),
            area,
        );
    }
}

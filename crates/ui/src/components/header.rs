use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::ThemePalette;
use crate::transcript::TranscriptView;

/// Title bar above the transcript
///
/// Shows the session title on the left and, while the transport is feeding,
/// the current turn count on the right.
pub struct Header<'a> {
    view: &'a TranscriptView,
    title: &'a str,
    theme: ThemePalette,
}

impl<'a> Header<'a> {
    pub fn new(view: &'a TranscriptView, title: &'a str, theme: ThemePalette) -> Self {
        Self { view, title, theme }
    }

    /// Render the header to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let turns = self.view.len();
        let right = if turns == 1 { "1 turn".to_string() } else { format!("{} turns", turns) };
        let right_width = right.chars().count() as u16;

        let left_spans = Line::from(vec![
            Span::styled("◈ ", Style::default().fg(self.theme.cyan)),
            Span::styled(self.title.to_string(), Style::default().fg(self.theme.fg).bold()),
        ]);
        frame.render_widget(
            Paragraph::new(left_spans).style(Style::default().bg(self.theme.panel_bg)),
            area,
        );

        if area.width > right_width + 1 {
            let right_area = Rect {
                x: area.x + area.width - right_width - 1,
                y: area.y,
                width: right_width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::from(vec![Span::styled(right, Style::default().fg(self.theme.muted))]))
                    .style(Style::default().bg(self.theme.panel_bg)),
                right_area,
            );
        }
    }
}

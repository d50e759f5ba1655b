use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};
use rill_core::Message;

use super::wrap::wrap_text;
use crate::transcript::preview::{pretty_response, tool_response_preview};

impl<'a> super::TranscriptRenderer<'a> {
    /// Render a tool turn as a collapsed-by-default disclosure entry
    ///
    /// Nothing renders without a response payload. The summary row carries
    /// the response name and a capped preview; expanding shows the
    /// pretty-printed payload when it parses and the raw text otherwise.
    pub(super) fn render_tool_entry(&self, message: &Message, width: usize, lines: &mut Vec<Line<'static>>) {
        let Some(response) = message.tool_response() else {
            return;
        };

        let expanded = self.view.is_expanded(&message.id);
        let focused = self.view.is_focused(&message.id);
        let marker = if expanded { "▾" } else { "▸" };
        let marker_color = if focused { self.theme.yellow } else { self.theme.muted };

        let mut summary = vec![
            Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
            Span::styled("✓ ", Style::default().fg(self.theme.green)),
            Span::styled(response.name.clone(), Style::default().fg(self.theme.green).bold()),
        ];
        let preview = tool_response_preview(&response.response_data);
        if !preview.is_empty() {
            summary.push(Span::styled(" · ", Style::default().fg(self.theme.border)));
            summary.push(Span::styled(preview, Style::default().fg(self.theme.muted)));
        }
        lines.push(Line::from(summary));

        if !expanded {
            return;
        }

        let body = match pretty_response(&response.response_data) {
            Some(pretty) => pretty,
            None => response.response_data.clone(),
        };
        let body_style = Style::default().fg(self.theme.fg).bg(self.theme.panel_bg);
        let body_width = width.saturating_sub(4);
        for source_row in body.lines() {
            for row in wrap_text(source_row, body_width) {
                lines.push(Line::from(vec![
                    Span::styled("  ", Style::default()),
                    Span::styled(row, body_style),
                ]));
            }
            if source_row.trim().is_empty() {
                lines.push(Line::default());
            }
        }
    }
}

use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};
use rill_core::Message;

use super::wrap::wrap_text;
use crate::transcript::preview::tool_call_preview;

impl<'a> super::TranscriptRenderer<'a> {
    /// Render a user turn, end-aligned
    pub(super) fn render_user_message(&self, message: &Message, width: usize, lines: &mut Vec<Line<'static>>) {
        lines.push(
            Line::from(vec![
                Span::styled("User ", Style::default().fg(self.theme.blue).bold()),
                Span::styled("●", Style::default().fg(self.theme.blue)),
            ])
            .right_aligned(),
        );

        let content_style = Style::default().fg(self.theme.fg);
        for row in wrap_text(&message.content, width) {
            lines.push(Line::from(vec![Span::styled(row, content_style)]).right_aligned());
        }
    }

    /// Render an assistant turn: tool-call summaries, then content
    ///
    /// The last message in the list streams through the reveal cursor; older
    /// turns render their full content. The action-hint row mirrors the
    /// affordances: copy is always available, regenerate only on the last
    /// turn while no status indicator is showing.
    pub(super) fn render_assistant_message(
        &self, message: &Message, is_last: bool, width: usize, lines: &mut Vec<Line<'static>>,
    ) {
        let focused = self.view.is_focused(&message.id);
        let header_color = if focused { self.theme.yellow } else { self.theme.cyan };
        lines.push(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(header_color)),
            Span::styled("Assistant", Style::default().fg(header_color).bold()),
        ]));

        for call in message.tool_calls() {
            self.render_tool_call_summary(call, lines);
        }

        let content = self.view.visible_content(message);
        let content_style = Style::default().fg(self.theme.fg);
        for row in wrap_text(content, width) {
            lines.push(Line::from(vec![Span::styled(row, content_style)]));
        }

        if self.view.shows_reveal_cursor(message) {
            lines.push(Line::from(vec![Span::styled("█", Style::default().fg(self.theme.fg))]));
        }

        if is_last || focused {
            self.render_action_hints(message, is_last, lines);
        }
    }

    /// One-line summary of a tool call: name plus an argument preview
    fn render_tool_call_summary(&self, call: &rill_core::ToolCall, lines: &mut Vec<Line<'static>>) {
        let mut spans = vec![
            Span::styled("⚙ ", Style::default().fg(self.theme.blue)),
            Span::styled(call.name.clone(), Style::default().fg(self.theme.blue)),
        ];

        let preview = tool_call_preview(&call.arguments);
        if !preview.is_empty() {
            spans.push(Span::styled(" · ", Style::default().fg(self.theme.border)));
            spans.push(Span::styled(preview, Style::default().fg(self.theme.muted)));
        }

        lines.push(Line::from(spans));
    }

    fn render_action_hints(&self, message: &Message, is_last: bool, lines: &mut Vec<Line<'static>>) {
        let hint_style = Style::default().fg(self.theme.muted);
        let mut spans = vec![Span::styled("[c] copy", hint_style)];

        let regenerate_offered = is_last
            && self
                .view
                .regenerate_candidate()
                .is_some_and(|candidate| candidate.id == message.id);
        if regenerate_offered {
            spans.push(Span::styled("  [r] regenerate", hint_style));
        }

        lines.push(Line::from(spans));
    }

    /// Render a system annotation, centered and muted
    pub(super) fn render_system_message(&self, message: &Message, width: usize, lines: &mut Vec<Line<'static>>) {
        let style = Style::default().fg(self.theme.muted);
        for row in wrap_text(&message.content, width.saturating_sub(4)) {
            lines.push(Line::from(vec![Span::styled(format!("· {} ·", row), style)]).centered());
        }
    }
}

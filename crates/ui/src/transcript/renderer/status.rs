use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

use crate::transcript::state::StatusIndicator;

impl<'a> super::TranscriptRenderer<'a> {
    /// Render the transient "agent is working" indicator
    ///
    /// Pulses by alternating the label between bright and muted on the
    /// animation frame the app advances with its reveal tick.
    pub(super) fn render_status_indicator(
        &self, indicator: &StatusIndicator, width: usize, lines: &mut Vec<Line<'static>>,
    ) {
        // the frame advances every ~30 ms tick; divide it down so the pulse
        // breathes at roughly 600 ms instead of flickering
        let bright = (self.animation_frame / 10) % 2 == 0;
        let label_style = if bright {
            Style::default().fg(self.theme.cyan).bold()
        } else {
            Style::default().fg(self.theme.muted).bold()
        };

        let mut spans = vec![
            Span::styled("✦ ", label_style),
            Span::styled(indicator.kind.label().to_string(), label_style),
        ];

        if !indicator.text.is_empty() {
            spans.push(Span::styled(" · ", Style::default().fg(self.theme.border)));
            let detail_width = width.saturating_sub(indicator.kind.label().len() + 5);
            let mut detail = indicator.text.clone();
            if let Some((idx, _)) = detail.char_indices().nth(detail_width.max(1)) {
                detail.truncate(idx);
            }
            spans.push(Span::styled(detail, Style::default().fg(self.theme.muted)));
        }

        lines.push(Line::from(spans));
    }
}

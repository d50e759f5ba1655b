use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
};

use crate::theme::ThemePalette;
use crate::transcript::{TranscriptRenderer, TranscriptView};

/// The scrollable transcript region
///
/// Coordinates the pure line builder with the view's scroll state: rows are
/// built first, their count (the post-update scroll height) is fed through
/// [`TranscriptView::apply_layout`], and only then is the frame drawn with
/// the resolved offset. Queued follow commands therefore always act on fresh
/// geometry.
pub struct TranscriptPane<'a> {
    view: &'a mut TranscriptView,
    theme: ThemePalette,
    animation_frame: u8,
}

impl<'a> TranscriptPane<'a> {
    pub fn new(view: &'a mut TranscriptView, theme: ThemePalette, animation_frame: u8) -> Self {
        Self { view, theme, animation_frame }
    }

    /// Render the transcript into `area`
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Block::default().style(Style::default().bg(self.theme.bg)), area);
        if area.width < 4 || area.height == 0 {
            return;
        }

        let content_width = area.width.saturating_sub(2) as usize;
        let lines = TranscriptRenderer::with_animation_frame(self.view, self.theme, self.animation_frame)
            .build_lines(content_width);
        let offset = self.view.apply_layout(lines.len(), area.height as usize);

        let inner = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        let paragraph = Paragraph::new(Text::from(lines))
            .style(Style::default().bg(self.theme.bg))
            .scroll((offset as u16, 0));
        frame.render_widget(paragraph, inner);

        if self.view.shows_jump_affordance() {
            self.render_jump_affordance(frame, area);
        }
    }

    /// Floating "back to newest" affordance, shown while follow is disengaged
    fn render_jump_affordance(&self, frame: &mut Frame<'_>, area: Rect) {
        let label = " ↓ End · newest ";
        let width = label.chars().count() as u16;
        if area.width <= width + 2 || area.height < 2 {
            return;
        }

        let overlay = Rect {
            x: area.x + area.width - width - 2,
            y: area.y + area.height - 1,
            width,
            height: 1,
        };
        let badge = Paragraph::new(Line::from(vec![Span::styled(
            label,
            Style::default().fg(self.theme.bg).bg(self.theme.cyan).bold(),
        )]));
        frame.render_widget(badge, overlay);
    }
}

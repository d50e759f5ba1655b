mod messages;
mod status;
mod tool;
mod wrap;

use ratatui::text::Line;
use rill_core::Role;

use crate::theme::ThemePalette;
use crate::transcript::state::TranscriptView;

/// Builds the transcript's styled rows
///
/// A pure line builder: it reads the view state and produces one `Line` per
/// terminal row, wrapping included. The component that owns the frame feeds
/// the resulting row count back into [`TranscriptView::apply_layout`] so
/// deferred follow commands act on real post-update geometry.
pub struct TranscriptRenderer<'a> {
    view: &'a TranscriptView,
    theme: ThemePalette,
    animation_frame: u8,
}

impl<'a> TranscriptRenderer<'a> {
    pub fn new(view: &'a TranscriptView, theme: ThemePalette) -> Self {
        Self { view, theme, animation_frame: 0 }
    }

    /// Renderer with the current animation frame, for pulsing elements
    pub fn with_animation_frame(view: &'a TranscriptView, theme: ThemePalette, animation_frame: u8) -> Self {
        Self { view, theme, animation_frame }
    }

    /// Lay the whole transcript out at `width` columns
    pub fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (idx, message) in self.view.messages().iter().enumerate() {
            let is_last = idx + 1 == self.view.len();
            let mut rendered = Vec::new();
            match message.role {
                Role::User => self.render_user_message(message, width, &mut rendered),
                Role::Assistant => self.render_assistant_message(message, is_last, width, &mut rendered),
                Role::Tool => self.render_tool_entry(message, width, &mut rendered),
                Role::System => self.render_system_message(message, width, &mut rendered),
            }

            // roles can decline to render (tool turn without a payload)
            if rendered.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.append(&mut rendered);
        }

        if let Some(indicator) = self.view.status() {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            self.render_status_indicator(indicator, width, &mut lines);
        }

        lines
    }
}
